use dioxus::prelude::*;

use crate::content::SeoConfig;

/// Title, description, keywords and canonical link for a page
#[component]
pub fn SeoHead(config: SeoConfig) -> Element {
    let canonical = config.canonical();

    rsx! {
        document::Title { "{config.title}" }
        document::Meta { name: "description", content: "{config.description}" }
        document::Meta { name: "keywords", content: "{config.keywords}" }
        document::Meta { property: "og:title", content: "{config.title}" }
        document::Meta { property: "og:description", content: "{config.description}" }
        document::Link { rel: "canonical", href: "{canonical}" }
    }
}
