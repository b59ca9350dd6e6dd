use dioxus::prelude::*;

use crate::content::SectionNavItem;
use crate::hooks::SectionTracker;

/// Secondary nav pinned to the top once the reader scrolls past the hero
#[component]
pub fn StickySectionNav(sections: &'static [SectionNavItem], tracker: SectionTracker) -> Element {
    let visible = *tracker.sticky_visible.read();
    let active = tracker.active.read().clone();

    let visibility = if visible {
        "translate-y-0 opacity-100"
    } else {
        "-translate-y-full opacity-0 pointer-events-none"
    };

    rsx! {
        nav {
            class: "fixed top-0 inset-x-0 z-40 bg-background/95 backdrop-blur-sm border-b border-border shadow-sm transition-all duration-300 {visibility}",
            aria_label: "Page sections",
            aria_hidden: if visible { "false" } else { "true" },
            div {
                class: "max-w-7xl mx-auto px-4 flex gap-1 overflow-x-auto",
                for section in sections.iter() {
                    {
                        let is_active = active.as_deref() == Some(section.id);
                        let id = section.id;
                        rsx! {
                            button {
                                key: "{id}",
                                r#type: "button",
                                class: if is_active {
                                    "px-4 py-3 text-sm font-semibold whitespace-nowrap border-b-2 border-primary text-primary"
                                } else {
                                    "px-4 py-3 text-sm whitespace-nowrap border-b-2 border-transparent text-muted-foreground hover:text-foreground"
                                },
                                aria_current: if is_active { "true" } else { "false" },
                                onclick: move |_| scroll_to(id),
                                "{section.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Smooth-scroll to a section anchor below the sticky header
#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
pub fn scroll_to(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use crate::utils::viewport::BrowserViewport;

        match BrowserViewport::new() {
            Ok(viewport) => {
                if !crate::utils::scroll_to_section(&viewport, id) {
                    let err = crate::error::SiteError::ElementNotFound { id: id.to_string() };
                    log::debug!("{}", err);
                }
            }
            Err(e) => log::warn!("Cannot scroll to '{}': {}", id, e),
        }
    }
}
