use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SiteConfig;
use crate::content::SectionNavItem;
use crate::stores::nav_visibility::{publish_sticky_nav, release_sticky_nav, GlobalNav, NavSink};
use crate::utils::scroll::ScrollUpdate;
use crate::utils::{ListenerKind, ListenerSlot, ListenerTarget, ScrollTracker, Viewport};

/// Scroll-driven state of a page with a sticky section nav
#[derive(Clone, Copy, PartialEq)]
pub struct SectionTracker {
    /// Id of the section being read, last value kept above all sections
    pub active: Signal<Option<String>>,
    /// Whether the page's sticky nav is shown
    pub sticky_visible: Signal<bool>,
}

/// Build the handler run on every scroll tick
///
/// Each tick re-measures the sections and re-publishes nav visibility, so a
/// viewport resized across the desktop breakpoint gets the right navbar on
/// its next scroll. `on_update` sees the tracker after every tick.
pub fn scroll_handler<V, N>(
    viewport: V,
    sections: &'static [SectionNavItem],
    config: SiteConfig,
    mut nav: N,
    mut on_update: impl FnMut(&ScrollTracker, ScrollUpdate) + 'static,
) -> impl FnMut() + 'static
where
    V: Viewport + 'static,
    N: NavSink + 'static,
{
    let mut tracker = ScrollTracker::new(config);
    move || {
        let update = tracker.on_scroll(&viewport, sections);
        let is_desktop = config.is_desktop(viewport.inner_width());
        publish_sticky_nav(&mut nav, is_desktop, tracker.sticky_visible());
        on_update(&tracker, update);
    }
}

/// Scroll listener of one mounted page
#[derive(Default)]
pub struct SectionWatch {
    slot: ListenerSlot,
}

impl SectionWatch {
    pub fn is_mounted(&self) -> bool {
        self.slot.is_active()
    }

    /// Measure the current position and start listening
    ///
    /// No-op while mounted, so effect re-runs never add a second listener.
    pub fn mount<T>(&mut self, target: &T, mut handler: impl FnMut() + 'static)
    where
        T: ListenerTarget + 'static,
    {
        if self.is_mounted() {
            return;
        }

        // Reloads restore the scroll offset
        handler();

        self.slot.sync(true, || {
            target.listen(ListenerKind::Scroll, Box::new(move |_| handler()))
        });
    }

    /// Stop listening and hand the navbar back
    pub fn unmount(&mut self, nav: &mut impl NavSink, is_desktop: bool) {
        self.slot.clear();
        release_sticky_nav(nav, is_desktop);
    }
}

/// Track the active section and sticky nav visibility from window scroll
///
/// Installs one `scroll` listener per mount and removes it on unmount. On
/// desktop the global navbar is hidden while the sticky nav shows, and
/// restored on unmount.
///
/// # Example
/// ```
/// let tracker = use_section_tracker(SECTIONS);
///
/// // In your rsx:
/// StickySectionNav { sections: SECTIONS, tracker }
/// ```
pub fn use_section_tracker(sections: &'static [SectionNavItem]) -> SectionTracker {
    let active = use_signal(|| None::<String>);
    let sticky_visible = use_signal(|| false);

    let watch = use_hook(|| Rc::new(RefCell::new(SectionWatch::default())));

    let watch_for_effect = watch.clone();
    use_effect(move || {
        mount_section_watch(&watch_for_effect, sections, active, sticky_visible);
    });

    use_drop(move || {
        watch.borrow_mut().unmount(&mut GlobalNav, viewport_is_desktop());
    });

    SectionTracker { active, sticky_visible }
}

#[cfg(target_arch = "wasm32")]
fn mount_section_watch(
    watch: &RefCell<SectionWatch>,
    sections: &'static [SectionNavItem],
    mut active: Signal<Option<String>>,
    mut sticky_visible: Signal<bool>,
) {
    use crate::utils::listeners::WindowTarget;
    use crate::utils::viewport::BrowserViewport;

    if watch.borrow().is_mounted() {
        return;
    }

    let viewport = match BrowserViewport::new() {
        Ok(v) => v,
        Err(e) => {
            log::warn!("Section tracking disabled: {}", e);
            return;
        }
    };

    let handler = scroll_handler(
        viewport,
        sections,
        SiteConfig::default(),
        GlobalNav,
        move |tracker, update| {
            if update.visibility_changed {
                sticky_visible.set(tracker.sticky_visible());
            }
            if update.active_changed {
                log::debug!("Active section: {:?}", tracker.active());
                active.set(tracker.active().map(str::to_string));
            }
        },
    );
    watch.borrow_mut().mount(&WindowTarget, handler);
}

#[cfg(not(target_arch = "wasm32"))]
fn mount_section_watch(
    _watch: &RefCell<SectionWatch>,
    _sections: &'static [SectionNavItem],
    _active: Signal<Option<String>>,
    _sticky_visible: Signal<bool>,
) {
}

#[cfg(target_arch = "wasm32")]
fn viewport_is_desktop() -> bool {
    crate::utils::viewport::BrowserViewport::new()
        .map(|viewport| SiteConfig::default().is_desktop(viewport.inner_width()))
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn viewport_is_desktop() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::nav_visibility::fake::FakeNav;
    use crate::utils::listeners::fake::FakeTarget;
    use crate::utils::viewport::fake::FakeViewport;

    const SECTIONS: &[SectionNavItem] = &[
        SectionNavItem { id: "overview", label: "Overview" },
        SectionNavItem { id: "features", label: "Features" },
        SectionNavItem { id: "faq", label: "FAQ" },
    ];

    #[derive(Clone, Default)]
    struct SharedNav(Rc<RefCell<FakeNav>>);

    impl NavSink for SharedNav {
        fn hidden(&self) -> bool {
            self.0.borrow().hidden
        }

        fn set_hidden(&mut self, hidden: bool) {
            self.0.borrow_mut().set_hidden(hidden);
        }
    }

    fn page() -> Rc<FakeViewport> {
        Rc::new(FakeViewport::with_sections(&[
            ("overview", 0.0),
            ("features", 500.0),
            ("faq", 1000.0),
        ]))
    }

    fn handler(viewport: &Rc<FakeViewport>, nav: &SharedNav) -> impl FnMut() + 'static {
        scroll_handler(viewport.clone(), SECTIONS, SiteConfig::default(), nav.clone(), |_, _| {})
    }

    #[test]
    fn test_mount_unmount_leaves_no_scroll_listener() {
        let target = FakeTarget::default();
        let viewport = page();
        let nav = SharedNav::default();
        let mut watch = SectionWatch::default();

        watch.mount(&target, handler(&viewport, &nav));
        // effect re-runs
        watch.mount(&target, handler(&viewport, &nav));
        watch.mount(&target, handler(&viewport, &nav));
        assert!(watch.is_mounted());
        assert_eq!(target.added(ListenerKind::Scroll), 1);

        watch.unmount(&mut nav.clone(), true);
        assert!(!watch.is_mounted());
        assert_eq!(target.removed(ListenerKind::Scroll), 1);
        assert_eq!(target.residual(ListenerKind::Scroll), 0);
    }

    #[test]
    fn test_initial_measure_and_scroll_ticks() {
        let target = FakeTarget::default();
        let viewport = page();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut watch = SectionWatch::default();

        let seen_in_handler = seen.clone();
        let on_tick = scroll_handler(
            viewport.clone(),
            SECTIONS,
            SiteConfig::default(),
            SharedNav::default(),
            move |tracker, update| {
                if update.active_changed {
                    seen_in_handler
                        .borrow_mut()
                        .push(tracker.active().map(str::to_string));
                }
            },
        );

        viewport.scroll(600.0);
        watch.mount(&target, on_tick);
        assert_eq!(*seen.borrow(), vec![Some("features".to_string())]);

        viewport.scroll(1200.0);
        target.fire(ListenerKind::Scroll, "");
        // no change, no update
        target.fire(ListenerKind::Scroll, "");
        assert_eq!(
            *seen.borrow(),
            vec![Some("features".to_string()), Some("faq".to_string())]
        );
    }

    #[test]
    fn test_nav_follows_resize_past_breakpoint() {
        let target = FakeTarget::default();
        let viewport = page();
        let nav = SharedNav::default();
        let mut watch = SectionWatch::default();

        // Past the threshold on a mobile viewport
        viewport.resize(500.0);
        viewport.scroll(600.0);
        watch.mount(&target, handler(&viewport, &nav));
        assert!(!nav.hidden());

        // Widened to desktop; sticky visibility itself does not change
        viewport.resize(1280.0);
        viewport.scroll(610.0);
        target.fire(ListenerKind::Scroll, "");
        assert!(nav.hidden());

        target.fire(ListenerKind::Scroll, "");
        assert_eq!(nav.0.borrow().writes, 1);
    }

    #[test]
    fn test_unmount_releases_nav_on_desktop_only() {
        let target = FakeTarget::default();
        let viewport = page();
        let nav = SharedNav::default();

        viewport.scroll(800.0);
        let mut watch = SectionWatch::default();
        watch.mount(&target, handler(&viewport, &nav));
        assert!(nav.hidden());

        watch.unmount(&mut nav.clone(), false);
        assert!(nav.hidden());

        let mut watch = SectionWatch::default();
        watch.mount(&target, handler(&viewport, &nav));
        watch.unmount(&mut nav.clone(), true);
        assert!(!nav.hidden());
        assert_eq!(target.residual(ListenerKind::Scroll), 0);
    }
}
