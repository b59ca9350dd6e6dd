// Utility functions
// Scroll math, lightbox state, listener lifecycle and browser helpers

pub mod viewport;
pub mod scroll;
pub mod lightbox;
pub mod listeners;
pub mod form;
pub mod markdown;
pub mod download;

pub use viewport::Viewport;
pub use scroll::{compute_active_section, scroll_to_section, should_show_sticky_nav, ScrollTracker, SectionOffset};
pub use lightbox::{Lightbox, LightboxClick, LightboxKey};
pub use listeners::{ListenerKind, ListenerSlot, ListenerTarget, Subscription};
pub use form::{ContactField, ContactForm};

/// Turn a heading into an anchor id
pub fn slugify(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("DoD 5220.22-M (3 passes)"), "dod-5220-22-m-3-passes");
        assert_eq!(slugify("  FAQ  "), "faq");
    }
}
