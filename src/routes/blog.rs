use dioxus::prelude::*;

use crate::components::{ArticleContent, SeoHead, TranslationGate};
use crate::content::blog::DEGAUSSING_RISKS;
use crate::content::seo;
use crate::routes::{Route, BLOG_PATH, CONTACT_PATH};
use crate::stores::i18n::t;
use crate::utils::markdown::reading_time_minutes;

#[component]
pub fn DegaussingRisksBlog() -> Element {
    let post = DEGAUSSING_RISKS;
    let minutes = reading_time_minutes(post.body);

    rsx! {
        SeoHead { config: seo::DEGAUSSING_BLOG }
        TranslationGate {
            article {
                class: "max-w-3xl mx-auto px-6 py-12",

                a {
                    href: BLOG_PATH,
                    class: "text-sm text-blue-500 hover:underline",
                    "← All articles"
                }

                header {
                    class: "mt-6 mb-8 space-y-4",
                    h1 {
                        class: "text-4xl md:text-5xl font-bold leading-tight",
                        "{post.title}"
                    }
                    p {
                        class: "text-sm text-muted-foreground",
                        "{post.author} · {post.published} · {minutes} min read"
                    }
                }

                img {
                    src: "{post.cover}",
                    alt: "{post.title}",
                    class: "w-full rounded-xl mb-10 aspect-[2/1] object-cover bg-muted",
                }

                ArticleContent { content: post.body.to_string() }

                aside {
                    class: "mt-12 p-6 border border-border rounded-xl bg-muted/40 space-y-3",
                    h2 { class: "text-xl font-semibold", "Erase files with proof, not magnets" }
                    p {
                        class: "text-muted-foreground",
                        "Network File Eraser overwrites data on HDDs and SSDs alike and records every erasure in a signed report."
                    }
                    div {
                        class: "flex flex-wrap gap-3",
                        Link {
                            to: Route::FileEraser {},
                            class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition",
                            "See File Eraser"
                        }
                        a {
                            href: CONTACT_PATH,
                            class: "px-4 py-2 border border-border rounded-lg hover:bg-accent transition",
                            {t("cta.contact_sales")}
                        }
                    }
                }
            }
        }
    }
}
