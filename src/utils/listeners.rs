//! Window event listener lifecycle
//!
//! Follows the same rule as the websocket store: no `Closure::forget()`.
//! Every listener lives inside a `Subscription` that unregisters it on drop,
//! and a `ListenerSlot` holds at most one subscription so re-running an
//! effect never registers a second handler.

/// Window events the site listens to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Scroll,
    KeyDown,
}

impl ListenerKind {
    pub fn event_name(&self) -> &'static str {
        match self {
            ListenerKind::Scroll => "scroll",
            ListenerKind::KeyDown => "keydown",
        }
    }
}

/// Registered listener; dropping it removes the listener
pub struct Subscription {
    kind: ListenerKind,
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(kind: ListenerKind, teardown: impl FnOnce() + 'static) -> Self {
        Self {
            kind,
            teardown: Some(Box::new(teardown)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            log::debug!("Removing {} listener", self.kind.event_name());
            teardown();
        }
    }
}

/// Something listeners can be attached to
pub trait ListenerTarget {
    type Event;

    fn listen(
        &self,
        kind: ListenerKind,
        handler: Box<dyn FnMut(Self::Event)>,
    ) -> crate::error::SiteResult<Subscription>;
}

/// Holds zero or one subscription
#[derive(Default)]
pub struct ListenerSlot {
    current: Option<Subscription>,
}

impl ListenerSlot {
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Install when wanted and missing, remove when unwanted and present
    pub fn sync<F>(&mut self, wanted: bool, install: F)
    where
        F: FnOnce() -> crate::error::SiteResult<Subscription>,
    {
        match (wanted, self.current.is_some()) {
            (true, false) => match install() {
                Ok(subscription) => self.current = Some(subscription),
                Err(e) => log::warn!("Failed to install listener: {}", e),
            },
            (false, true) => self.clear(),
            _ => {}
        }
    }

    pub fn clear(&mut self) {
        // Drop runs the teardown
        self.current = None;
    }
}

/// The browser `window` as a listener target
#[cfg(target_arch = "wasm32")]
pub struct WindowTarget;

#[cfg(target_arch = "wasm32")]
impl ListenerTarget for WindowTarget {
    type Event = web_sys::Event;

    fn listen(
        &self,
        kind: ListenerKind,
        handler: Box<dyn FnMut(web_sys::Event)>,
    ) -> crate::error::SiteResult<Subscription> {
        use crate::error::SiteError;
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or(SiteError::WindowUnavailable)?;
        let closure = Closure::wrap(handler);

        window
            .add_event_listener_with_callback(kind.event_name(), closure.as_ref().unchecked_ref())
            .map_err(SiteError::dom)?;
        log::debug!("Added {} listener", kind.event_name());

        // The closure moves into the teardown so it stays alive until removal
        Ok(Subscription::new(kind, move || {
            if let Err(e) = window
                .remove_event_listener_with_callback(kind.event_name(), closure.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove {} listener: {:?}", kind.event_name(), e);
            }
        }))
    }
}

/// Outside the browser there is no window to listen on
#[cfg(not(target_arch = "wasm32"))]
pub struct WindowTarget;

#[cfg(not(target_arch = "wasm32"))]
impl ListenerTarget for WindowTarget {
    type Event = ();

    fn listen(
        &self,
        _kind: ListenerKind,
        _handler: Box<dyn FnMut(())>,
    ) -> crate::error::SiteResult<Subscription> {
        Err(crate::error::SiteError::WindowUnavailable)
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    type Handlers = Rc<RefCell<HashMap<usize, (ListenerKind, Box<dyn FnMut(String)>)>>>;

    /// Counts registrations per event kind and can dispatch to live handlers.
    /// Events carry a key name; scroll handlers ignore it.
    #[derive(Clone, Default)]
    pub struct FakeTarget {
        pub adds: Rc<RefCell<HashMap<ListenerKind, usize>>>,
        pub removes: Rc<RefCell<HashMap<ListenerKind, usize>>>,
        handlers: Handlers,
        next_id: Rc<RefCell<usize>>,
    }

    impl FakeTarget {
        pub fn added(&self, kind: ListenerKind) -> usize {
            self.adds.borrow().get(&kind).copied().unwrap_or(0)
        }

        pub fn removed(&self, kind: ListenerKind) -> usize {
            self.removes.borrow().get(&kind).copied().unwrap_or(0)
        }

        pub fn residual(&self, kind: ListenerKind) -> usize {
            self.added(kind) - self.removed(kind)
        }

        /// Deliver an event to every live handler of `kind`
        pub fn fire(&self, kind: ListenerKind, key: &str) {
            // Take the handlers out so one may touch the target while running
            let ids: Vec<usize> = self
                .handlers
                .borrow()
                .iter()
                .filter(|(_, (k, _))| *k == kind)
                .map(|(id, _)| *id)
                .collect();
            for id in ids {
                let entry = self.handlers.borrow_mut().remove(&id);
                if let Some((k, mut handler)) = entry {
                    handler(key.to_string());
                    self.handlers.borrow_mut().insert(id, (k, handler));
                }
            }
        }
    }

    impl ListenerTarget for FakeTarget {
        type Event = String;

        fn listen(
            &self,
            kind: ListenerKind,
            handler: Box<dyn FnMut(String)>,
        ) -> crate::error::SiteResult<Subscription> {
            *self.adds.borrow_mut().entry(kind).or_insert(0) += 1;

            let id = {
                let mut next = self.next_id.borrow_mut();
                *next += 1;
                *next
            };
            self.handlers.borrow_mut().insert(id, (kind, handler));

            let removes = self.removes.clone();
            let handlers = self.handlers.clone();
            Ok(Subscription::new(kind, move || {
                handlers.borrow_mut().remove(&id);
                *removes.borrow_mut().entry(kind).or_insert(0) += 1;
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeTarget;
    use super::*;
    use crate::error::SiteError;

    fn install(target: &FakeTarget, kind: ListenerKind) -> impl FnOnce() -> crate::error::SiteResult<Subscription> {
        let target = target.clone();
        move || target.listen(kind, Box::new(|_| {}))
    }

    #[test]
    fn test_mount_unmount_leaves_no_listeners() {
        let target = FakeTarget::default();
        let mut scroll = ListenerSlot::default();
        let mut keys = ListenerSlot::default();

        // mount
        scroll.sync(true, install(&target, ListenerKind::Scroll));
        // lightbox opens, then navigates (effect re-runs)
        keys.sync(true, install(&target, ListenerKind::KeyDown));
        keys.sync(true, install(&target, ListenerKind::KeyDown));
        keys.sync(true, install(&target, ListenerKind::KeyDown));

        assert_eq!(target.added(ListenerKind::Scroll), 1);
        assert_eq!(target.added(ListenerKind::KeyDown), 1);

        // unmount
        drop(scroll);
        drop(keys);

        assert_eq!(target.residual(ListenerKind::Scroll), 0);
        assert_eq!(target.residual(ListenerKind::KeyDown), 0);
        assert_eq!(target.removed(ListenerKind::Scroll), 1);
        assert_eq!(target.removed(ListenerKind::KeyDown), 1);
    }

    #[test]
    fn test_keydown_follows_open_state() {
        let target = FakeTarget::default();
        let mut keys = ListenerSlot::default();

        keys.sync(false, install(&target, ListenerKind::KeyDown));
        assert!(!keys.is_active());
        assert_eq!(target.added(ListenerKind::KeyDown), 0);

        keys.sync(true, install(&target, ListenerKind::KeyDown));
        assert!(keys.is_active());

        keys.sync(false, install(&target, ListenerKind::KeyDown));
        assert!(!keys.is_active());
        assert_eq!(target.residual(ListenerKind::KeyDown), 0);

        keys.sync(true, install(&target, ListenerKind::KeyDown));
        keys.clear();
        keys.clear();
        assert_eq!(target.added(ListenerKind::KeyDown), 2);
        assert_eq!(target.removed(ListenerKind::KeyDown), 2);
    }

    #[test]
    fn test_failed_install_leaves_slot_empty() {
        let mut slot = ListenerSlot::default();
        slot.sync(true, || Err(SiteError::WindowUnavailable));
        assert!(!slot.is_active());
    }

    #[test]
    fn test_event_names() {
        assert_eq!(ListenerKind::Scroll.event_name(), "scroll");
        assert_eq!(ListenerKind::KeyDown.event_name(), "keydown");
    }
}
