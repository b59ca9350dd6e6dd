use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::utils::listeners::WindowTarget;
use crate::utils::{Lightbox, LightboxKey, ListenerKind, ListenerSlot, ListenerTarget};

/// Keep a keydown listener installed exactly while `wanted`
///
/// `key_of` maps a raw event to a lightbox key; unmapped keys are ignored.
pub fn sync_key_listener<T>(
    slot: &mut ListenerSlot,
    target: &T,
    wanted: bool,
    key_of: fn(&T::Event) -> Option<LightboxKey>,
    mut on_key: impl FnMut(LightboxKey) + 'static,
) where
    T: ListenerTarget + 'static,
{
    slot.sync(wanted, || {
        target.listen(
            ListenerKind::KeyDown,
            Box::new(move |event| {
                if let Some(key) = key_of(&event) {
                    on_key(key);
                }
            }),
        )
    });
}

/// Keyboard navigation for an open lightbox
///
/// A window `keydown` listener exists only while the lightbox is open:
/// ArrowLeft/ArrowRight navigate with wrap-around, Escape closes.
pub fn use_lightbox_keys(lightbox: Signal<Lightbox>) {
    let slot = use_hook(|| Rc::new(RefCell::new(ListenerSlot::default())));

    let slot_for_effect = slot.clone();
    use_effect(move || {
        let wanted = lightbox.read().wants_keyboard();
        let mut lightbox = lightbox;
        sync_key_listener(
            &mut slot_for_effect.borrow_mut(),
            &WindowTarget,
            wanted,
            browser_key,
            move |key| lightbox.write().handle_key(key),
        );
    });

    use_drop(move || slot.borrow_mut().clear());
}

#[cfg(target_arch = "wasm32")]
fn browser_key(event: &web_sys::Event) -> Option<LightboxKey> {
    use wasm_bindgen::JsCast;

    let event = event.dyn_ref::<web_sys::KeyboardEvent>()?;
    let key = LightboxKey::from_key_name(&event.key())?;
    event.prevent_default();
    Some(key)
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_key(_event: &()) -> Option<LightboxKey> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::listeners::fake::FakeTarget;

    #[allow(clippy::ptr_arg)]
    fn key_name(event: &String) -> Option<LightboxKey> {
        LightboxKey::from_key_name(event)
    }

    fn sync(slot: &mut ListenerSlot, target: &FakeTarget, lightbox: &Rc<RefCell<Lightbox>>) {
        let wanted = lightbox.borrow().wants_keyboard();
        let lightbox = lightbox.clone();
        sync_key_listener(slot, target, wanted, key_name, move |key| {
            lightbox.borrow_mut().handle_key(key)
        });
    }

    #[test]
    fn test_keys_drive_open_lightbox() {
        let target = FakeTarget::default();
        let lightbox = Rc::new(RefCell::new(Lightbox::new(27)));
        let mut slot = ListenerSlot::default();

        sync(&mut slot, &target, &lightbox);
        assert_eq!(target.added(ListenerKind::KeyDown), 0);

        lightbox.borrow_mut().open(0);
        sync(&mut slot, &target, &lightbox);
        target.fire(ListenerKind::KeyDown, "ArrowLeft");
        assert_eq!(lightbox.borrow().index(), Some(26));

        // index change re-runs the effect
        sync(&mut slot, &target, &lightbox);
        target.fire(ListenerKind::KeyDown, "ArrowRight");
        target.fire(ListenerKind::KeyDown, "Enter");
        assert_eq!(lightbox.borrow().index(), Some(0));
        assert_eq!(target.added(ListenerKind::KeyDown), 1);

        target.fire(ListenerKind::KeyDown, "Escape");
        assert!(!lightbox.borrow().is_open());

        sync(&mut slot, &target, &lightbox);
        assert_eq!(target.residual(ListenerKind::KeyDown), 0);

        target.fire(ListenerKind::KeyDown, "ArrowRight");
        assert!(!lightbox.borrow().is_open());
    }

    #[test]
    fn test_unmount_while_open_removes_listener() {
        let target = FakeTarget::default();
        let lightbox = Rc::new(RefCell::new(Lightbox::new(3)));
        let mut slot = ListenerSlot::default();

        lightbox.borrow_mut().open(1);
        sync(&mut slot, &target, &lightbox);
        assert_eq!(target.residual(ListenerKind::KeyDown), 1);

        drop(slot);
        assert_eq!(target.removed(ListenerKind::KeyDown), 1);
        assert_eq!(target.residual(ListenerKind::KeyDown), 0);
    }
}
