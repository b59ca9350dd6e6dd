use dioxus::prelude::*;

use crate::components::icons::ChevronDownIcon;
use crate::content::FaqEntry;

/// Clicking the open entry closes it, any other entry replaces it
pub fn toggle_entry(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Accordion with at most one answer expanded
#[component]
pub fn FaqAccordion(entries: &'static [FaqEntry]) -> Element {
    let mut open = use_signal(|| None::<usize>);

    rsx! {
        div {
            class: "divide-y divide-border border border-border rounded-xl overflow-hidden",
            for (i, entry) in entries.iter().enumerate() {
                {
                    let is_open = *open.read() == Some(i);
                    rsx! {
                        div {
                            key: "{i}",
                            button {
                                r#type: "button",
                                class: "w-full flex items-center justify-between gap-4 px-5 py-4 text-left font-semibold hover:bg-accent transition",
                                aria_expanded: if is_open { "true" } else { "false" },
                                onclick: move |_| {
                                    let next = toggle_entry(*open.read(), i);
                                    open.set(next);
                                },
                                span { "{entry.q}" }
                                ChevronDownIcon {
                                    class: if is_open {
                                        "w-5 h-5 flex-shrink-0 rotate-180 transition-transform".to_string()
                                    } else {
                                        "w-5 h-5 flex-shrink-0 transition-transform".to_string()
                                    }
                                }
                            }
                            if is_open {
                                div {
                                    class: "px-5 pb-4 text-muted-foreground",
                                    "{entry.a}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::toggle_entry;

    #[test]
    fn test_toggle_entry() {
        assert_eq!(toggle_entry(None, 2), Some(2));
        assert_eq!(toggle_entry(Some(2), 2), None);
        assert_eq!(toggle_entry(Some(2), 0), Some(0));
    }
}
