use dioxus::prelude::*;

mod about;
mod faq;
mod support;

pub use about::HelpAbout;
pub use faq::HelpFaq;
pub use support::HelpSupport;

use crate::components::manual_page::{help_links, help_route};
use crate::components::{ManualPageView, ManualShell, SeoHead};
use crate::content::manual::find_page;
use crate::content::seo;
use crate::routes::Route;
use crate::stores::i18n::t;

/// Help manual landing page
#[component]
pub fn HelpIndex() -> Element {
    rsx! {
        SeoHead { config: seo::HELP_INDEX }
        ManualShell {
            current: String::new(),
            header {
                class: "mb-10",
                h1 { class: "text-4xl font-bold mb-3", {t("help.title")} }
                p {
                    class: "text-lg text-muted-foreground",
                    "Everything you need to install, license and run D-Secure Network File Eraser."
                }
            }
            div {
                class: "grid sm:grid-cols-2 gap-4",
                for (slug, title) in help_links() {
                    Link {
                        key: "{slug}",
                        to: help_route(slug),
                        class: "block border border-border rounded-lg p-5 hover:bg-accent transition",
                        h2 { class: "font-semibold", "{title}" }
                        if let Some(page) = find_page(slug) {
                            p { class: "text-sm text-muted-foreground mt-1", "{page.subtitle}" }
                        }
                    }
                }
            }
        }
    }
}

/// Manual page by slug
#[component]
pub fn HelpPage(slug: String) -> Element {
    match find_page(&slug) {
        Some(page) => rsx! {
            ManualPageView { page: *page }
        },
        None => {
            log::warn!("Unknown help page: {}", slug);
            rsx! {
                document::Title { "Help Page Not Found | D-Secure" }
                ManualShell {
                    current: String::new(),
                    h1 { class: "text-3xl font-bold mb-4", "Page not found" }
                    p {
                        class: "text-muted-foreground mb-6",
                        "There is no help page called "
                        code { class: "px-1 bg-muted rounded", "{slug}" }
                        "."
                    }
                    Link {
                        to: Route::HelpIndex {},
                        class: "text-blue-500 hover:underline",
                        "Browse all help topics"
                    }
                }
            }
        }
    }
}
