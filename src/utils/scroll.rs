//! Scroll-driven section tracking for pages with a sticky section nav
//!
//! `compute_active_section` is the pure core; `ScrollTracker` keeps the last
//! computed state between scroll events so the hook can skip signal writes
//! when nothing changed.

use crate::config::SiteConfig;
use crate::content::SectionNavItem;
use crate::utils::viewport::Viewport;

/// Measured position of a section anchor
#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub offset_top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, offset_top: f64) -> Self {
        Self { id: id.into(), offset_top }
    }
}

/// Find the section the reader is currently in
///
/// Walks the sections from last to first and returns the first whose
/// `offset_top - 150` is at or above `scroll_y`, so the lowest section
/// already scrolled past wins.
pub fn compute_active_section(scroll_y: f64, sections: &[SectionOffset]) -> Option<&str> {
    compute_active_section_with(scroll_y, sections, SiteConfig::default().section_activation_lead)
}

pub fn compute_active_section_with(
    scroll_y: f64,
    sections: &[SectionOffset],
    lead: f64,
) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.offset_top - lead <= scroll_y)
        .map(|section| section.id.as_str())
}

/// Sticky nav shows strictly past the threshold
pub fn should_show_sticky_nav(scroll_y: f64) -> bool {
    scroll_y > SiteConfig::default().sticky_nav_threshold
}

/// Page offset to scroll to so the section heading clears the header
pub fn scroll_target(offset_top: f64) -> f64 {
    offset_top - SiteConfig::default().header_offset
}

/// Smoothly scroll to a section anchor
///
/// Returns false without scrolling when no element has this id.
pub fn scroll_to_section(viewport: &impl Viewport, id: &str) -> bool {
    match viewport.absolute_top(id) {
        Some(top) => {
            viewport.smooth_scroll_to(scroll_target(top));
            true
        }
        None => {
            log::debug!("scroll_to_section: no element with id '{}'", id);
            false
        }
    }
}

/// What changed after handling one scroll event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub active_changed: bool,
    pub visibility_changed: bool,
}

impl ScrollUpdate {
    pub fn is_empty(&self) -> bool {
        !self.active_changed && !self.visibility_changed
    }
}

/// Stateful wrapper around the pure section computation
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    config: SiteConfig,
    active: Option<String>,
    sticky_visible: bool,
    offsets: Vec<SectionOffset>,
}

impl ScrollTracker {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn sticky_visible(&self) -> bool {
        self.sticky_visible
    }

    /// Handle one scroll tick
    ///
    /// Sections whose element is missing are skipped. When no section
    /// qualifies the previous active section is kept.
    pub fn on_scroll(&mut self, viewport: &impl Viewport, sections: &[SectionNavItem]) -> ScrollUpdate {
        let scroll_y = viewport.scroll_y();
        let mut update = ScrollUpdate::default();

        let visible = scroll_y > self.config.sticky_nav_threshold;
        if visible != self.sticky_visible {
            self.sticky_visible = visible;
            update.visibility_changed = true;
        }

        // Reuse the buffer, this runs on every scroll event
        self.offsets.clear();
        for section in sections {
            if let Some(offset_top) = viewport.offset_top(section.id) {
                self.offsets.push(SectionOffset::new(section.id, offset_top));
            }
        }

        let found = compute_active_section_with(scroll_y, &self.offsets, self.config.section_activation_lead);
        if let Some(id) = found {
            if self.active.as_deref() != Some(id) {
                self.active = Some(id.to_string());
                update.active_changed = true;
            }
        }

        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::viewport::fake::FakeViewport;

    const SECTIONS: &[SectionNavItem] = &[
        SectionNavItem { id: "overview", label: "Overview" },
        SectionNavItem { id: "features", label: "Features" },
        SectionNavItem { id: "faq", label: "FAQ" },
    ];

    fn offsets() -> Vec<SectionOffset> {
        vec![
            SectionOffset::new("overview", 0.0),
            SectionOffset::new("features", 500.0),
            SectionOffset::new("faq", 1000.0),
        ]
    }

    #[test]
    fn test_lowest_passed_section_wins() {
        assert_eq!(compute_active_section(600.0, &offsets()), Some("features"));
    }

    #[test]
    fn test_activation_lead() {
        // 1000 - 150 = 850
        assert_eq!(compute_active_section(849.0, &offsets()), Some("features"));
        assert_eq!(compute_active_section(850.0, &offsets()), Some("faq"));
    }

    #[test]
    fn test_no_section_qualifies() {
        let sections = vec![SectionOffset::new("hero", 800.0)];
        assert_eq!(compute_active_section(0.0, &sections), None);
        assert_eq!(compute_active_section(0.0, &[]), None);
    }

    #[test]
    fn test_sticky_nav_threshold() {
        assert!(!should_show_sticky_nav(0.0));
        assert!(!should_show_sticky_nav(399.0));
        assert!(!should_show_sticky_nav(400.0));
        assert!(should_show_sticky_nav(401.0));
    }

    #[test]
    fn test_scroll_to_section_applies_header_offset() {
        let viewport = FakeViewport::with_sections(&[("faq", 1000.0)]);
        assert!(scroll_to_section(&viewport, "faq"));
        assert_eq!(*viewport.scrolled_to.borrow(), vec![900.0]);
    }

    #[test]
    fn test_scroll_to_missing_section_is_noop() {
        let viewport = FakeViewport::with_sections(&[]);
        assert!(!scroll_to_section(&viewport, "nowhere"));
        assert!(viewport.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn test_tracker_reports_changes_only() {
        let viewport = FakeViewport::with_sections(&[
            ("overview", 0.0),
            ("features", 500.0),
            ("faq", 1000.0),
        ]);
        let mut tracker = ScrollTracker::new(SiteConfig::default());

        viewport.scroll(600.0);
        let update = tracker.on_scroll(&viewport, SECTIONS);
        assert!(update.active_changed);
        assert!(update.visibility_changed);
        assert_eq!(tracker.active(), Some("features"));
        assert!(tracker.sticky_visible());

        viewport.scroll(610.0);
        assert!(tracker.on_scroll(&viewport, SECTIONS).is_empty());

        viewport.scroll(100.0);
        let update = tracker.on_scroll(&viewport, SECTIONS);
        assert!(update.active_changed);
        assert!(update.visibility_changed);
        assert_eq!(tracker.active(), Some("overview"));
        assert!(!tracker.sticky_visible());
    }

    #[test]
    fn test_tracker_skips_missing_elements() {
        // "features" is not mounted
        let viewport = FakeViewport::with_sections(&[("overview", 0.0), ("faq", 1000.0)]);
        let mut tracker = ScrollTracker::new(SiteConfig::default());

        viewport.scroll(600.0);
        tracker.on_scroll(&viewport, SECTIONS);
        assert_eq!(tracker.active(), Some("overview"));
    }

    #[test]
    fn test_tracker_keeps_last_active_above_all_sections() {
        let viewport = FakeViewport::with_sections(&[("features", 500.0), ("faq", 1000.0)]);
        let mut tracker = ScrollTracker::new(SiteConfig::default());

        viewport.scroll(1200.0);
        tracker.on_scroll(&viewport, SECTIONS);
        assert_eq!(tracker.active(), Some("faq"));

        viewport.scroll(0.0);
        let update = tracker.on_scroll(&viewport, SECTIONS);
        assert!(!update.active_changed);
        assert_eq!(tracker.active(), Some("faq"));
    }
}
