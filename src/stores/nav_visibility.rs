use dioxus::prelude::*;

/// Whether the global navbar should step aside for a page's own sticky nav
///
/// Written by pages that show a sticky section nav, read by the site
/// `Layout`. Replaces an ad hoc `stickyNavVisible` DOM event.
pub static HIDE_GLOBAL_NAV: GlobalSignal<bool> = Signal::global(|| false);

/// Sticky nav visibility message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSignal {
    pub visible: bool,
}

/// Only desktop viewports swap navbars; on mobile both stay as they are
pub fn nav_signal(is_desktop: bool, visible: bool) -> Option<NavSignal> {
    is_desktop.then_some(NavSignal { visible })
}

/// Receiver of nav visibility messages
pub trait NavSink {
    fn hidden(&self) -> bool;
    fn set_hidden(&mut self, hidden: bool);
}

/// The `HIDE_GLOBAL_NAV` signal read by the site layout
pub struct GlobalNav;

impl NavSink for GlobalNav {
    fn hidden(&self) -> bool {
        // peek: publishing must not subscribe the caller
        *HIDE_GLOBAL_NAV.peek()
    }

    fn set_hidden(&mut self, hidden: bool) {
        *HIDE_GLOBAL_NAV.write() = hidden;
    }
}

/// Publish sticky nav visibility, returns whether the sink was written
///
/// Called on every scroll tick. The write is skipped when unchanged so the
/// layout doesn't re-render per tick.
pub fn publish_sticky_nav(sink: &mut impl NavSink, is_desktop: bool, visible: bool) -> bool {
    let Some(signal) = nav_signal(is_desktop, visible) else {
        return false;
    };

    if sink.hidden() == signal.visible {
        return false;
    }
    sink.set_hidden(signal.visible);
    log::debug!("Sticky nav visible: {}", signal.visible);
    true
}

/// Restore the global navbar when a sticky-nav page goes away
pub fn release_sticky_nav(sink: &mut impl NavSink, is_desktop: bool) {
    publish_sticky_nav(sink, is_desktop, false);
}

#[cfg(test)]
pub(crate) mod fake {
    use super::NavSink;

    /// Records every write
    #[derive(Default)]
    pub struct FakeNav {
        pub hidden: bool,
        pub writes: usize,
    }

    impl NavSink for FakeNav {
        fn hidden(&self) -> bool {
            self.hidden
        }

        fn set_hidden(&mut self, hidden: bool) {
            self.hidden = hidden;
            self.writes += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeNav;
    use super::*;

    #[test]
    fn test_desktop_only() {
        assert_eq!(nav_signal(true, true), Some(NavSignal { visible: true }));
        assert_eq!(nav_signal(true, false), Some(NavSignal { visible: false }));
        assert_eq!(nav_signal(false, true), None);
        assert_eq!(nav_signal(false, false), None);
    }

    #[test]
    fn test_publish_writes_only_on_change() {
        let mut nav = FakeNav::default();

        assert!(publish_sticky_nav(&mut nav, true, true));
        assert!(!publish_sticky_nav(&mut nav, true, true));
        assert!(!publish_sticky_nav(&mut nav, true, true));
        assert!(nav.hidden);
        assert_eq!(nav.writes, 1);

        assert!(publish_sticky_nav(&mut nav, true, false));
        assert!(!nav.hidden);
        assert_eq!(nav.writes, 2);
    }

    #[test]
    fn test_mobile_never_publishes() {
        let mut nav = FakeNav::default();
        assert!(!publish_sticky_nav(&mut nav, false, true));
        assert!(!nav.hidden);
        assert_eq!(nav.writes, 0);
    }

    #[test]
    fn test_release_restores_navbar_on_desktop_only() {
        let mut nav = FakeNav { hidden: true, writes: 0 };
        release_sticky_nav(&mut nav, false);
        assert!(nav.hidden);

        release_sticky_nav(&mut nav, true);
        assert!(!nav.hidden);
        assert_eq!(nav.writes, 1);
    }
}
