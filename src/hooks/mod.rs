pub mod use_lightbox_keys;
pub mod use_section_tracker;
pub mod use_translation_ready;

pub use use_lightbox_keys::use_lightbox_keys;
pub use use_section_tracker::{use_section_tracker, SectionTracker};
pub use use_translation_ready::use_translation_ready;
