// UI Components
// This module contains all reusable UI components

pub mod icons;
pub mod article_content;
pub mod contact_form;
pub mod faq_accordion;
pub mod feature_card;
pub mod lightbox_modal;
pub mod manual_page;
pub mod seo_head;
pub mod sticky_section_nav;
pub mod translation_gate;
pub mod video_modal;

pub use article_content::ArticleContent;
pub use contact_form::ContactForm;
pub use faq_accordion::FaqAccordion;
pub use feature_card::FeatureGrid;
pub use lightbox_modal::LightboxGallery;
pub use manual_page::{ManualPageView, ManualShell};
pub use seo_head::SeoHead;
pub use sticky_section_nav::StickySectionNav;
pub use translation_gate::TranslationGate;
pub use video_modal::VideoModal;
