use dioxus::prelude::*;

use crate::components::{FaqAccordion, ManualShell, SeoHead};
use crate::content::manual::MANUAL_FAQS;
use crate::content::seo;

#[component]
pub fn HelpFaq() -> Element {
    rsx! {
        SeoHead { config: seo::HELP_FAQ }
        ManualShell {
            current: "faq".to_string(),
            h1 {
                class: "text-4xl font-bold mb-3",
                "Frequently Asked Questions"
            }
            p {
                class: "text-lg text-muted-foreground mb-8",
                "Quick answers about installing, licensing and running Network File Eraser."
            }
            FaqAccordion { entries: MANUAL_FAQS }
        }
    }
}
