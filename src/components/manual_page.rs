use dioxus::prelude::*;

use crate::components::SeoHead;
use crate::content::manual::MANUAL_PAGES;
use crate::content::{seo, ManualPage, ManualSection};
use crate::routes::Route;
use crate::stores::i18n::t;

/// Shared layout of the help manual: sidebar plus page body
#[component]
pub fn ManualPageView(page: ManualPage) -> Element {
    rsx! {
        SeoHead { config: seo::manual(page.slug) }
        ManualShell {
            current: page.slug.to_string(),
            header {
                class: "mb-8",
                h1 {
                    class: "text-4xl font-bold mb-3",
                    "{page.title}"
                }
                p {
                    class: "text-lg text-muted-foreground",
                    "{page.subtitle}"
                }
            }

            // On-page table of contents
            if page.sections.len() > 1 {
                nav {
                    class: "mb-8 p-4 border border-border rounded-lg bg-muted/40",
                    aria_label: "On this page",
                    ul {
                        class: "space-y-1 text-sm",
                        for section in page.sections.iter() {
                            li {
                                key: "{section.heading}",
                                a {
                                    href: "#{section.anchor()}",
                                    class: "text-blue-500 hover:underline",
                                    "{section.heading}"
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "space-y-10",
                for section in page.sections.iter() {
                    ManualSectionView { key: "{section.heading}", section: *section }
                }
            }
        }
    }
}

#[component]
fn ManualSectionView(section: ManualSection) -> Element {
    rsx! {
        section {
            id: "{section.anchor()}",
            class: "space-y-4 scroll-mt-24",
            h2 {
                class: "text-2xl font-semibold",
                "{section.heading}"
            }
            for paragraph in section.paragraphs.iter() {
                p { class: "leading-relaxed", "{paragraph}" }
            }
            if !section.bullets.is_empty() {
                ul {
                    class: "list-disc pl-6 space-y-2",
                    for bullet in section.bullets.iter() {
                        li { "{bullet}" }
                    }
                }
            }
            if !section.steps.is_empty() {
                ol {
                    class: "list-decimal pl-6 space-y-2",
                    for step in section.steps.iter() {
                        li { "{step}" }
                    }
                }
            }
            if let Some(note) = section.note {
                div {
                    class: "border-l-4 border-amber-500 bg-amber-50 dark:bg-amber-950/30 px-4 py-3 rounded-r-lg text-sm",
                    strong { "Note: " }
                    "{note}"
                }
            }
        }
    }
}

/// Sidebar + content frame used by every help page
#[component]
pub fn ManualShell(current: String, children: Element) -> Element {
    rsx! {
        div {
            class: "max-w-7xl mx-auto px-6 py-12 flex gap-10",
            aside {
                class: "w-64 flex-shrink-0 hidden lg:block",
                div {
                    class: "sticky top-24 space-y-1",
                    Link {
                        to: Route::HelpIndex {},
                        class: "block px-3 py-2 mb-2 font-bold",
                        {t("help.title")}
                    }
                    for (slug, title) in help_links() {
                        Link {
                            key: "{slug}",
                            to: help_route(slug),
                            class: if slug == current {
                                "block px-3 py-2 rounded-lg bg-accent font-semibold"
                            } else {
                                "block px-3 py-2 rounded-lg text-muted-foreground hover:bg-accent transition"
                            },
                            "{title}"
                        }
                    }
                }
            }
            article {
                class: "flex-1 min-w-0",
                {children}
                div {
                    class: "mt-12 pt-6 border-t border-border",
                    Link {
                        to: Route::HelpIndex {},
                        class: "text-blue-500 hover:underline",
                        "← "
                        {t("help.back")}
                    }
                }
            }
        }
    }
}

/// Every help page in sidebar order, hand-written pages included
pub fn help_links() -> Vec<(&'static str, &'static str)> {
    let mut links = vec![("about", "About")];
    links.extend(MANUAL_PAGES.iter().map(|page| (page.slug, page.title)));
    links.push(("faq", "FAQ"));
    links.push(("support", "Support"));
    links
}

/// Route of a help page by slug
pub fn help_route(slug: &str) -> Route {
    match slug {
        "about" => Route::HelpAbout {},
        "faq" => Route::HelpFaq {},
        "support" => Route::HelpSupport {},
        other => Route::HelpPage { slug: other.to_string() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_links_cover_all_pages() {
        let links = help_links();
        assert_eq!(links.len(), MANUAL_PAGES.len() + 3);
        assert_eq!(links.first().map(|l| l.0), Some("about"));
        assert_eq!(links.last().map(|l| l.0), Some("support"));
    }

    #[test]
    fn test_help_route() {
        assert_eq!(help_route("faq"), Route::HelpFaq {});
        assert_eq!(
            help_route("licensing"),
            Route::HelpPage { slug: "licensing".to_string() }
        );
    }
}
