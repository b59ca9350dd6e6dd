use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    log::info!("No route for {}", path);

    rsx! {
        document::Title { "Page Not Found | D-Secure" }
        div {
            class: "max-w-xl mx-auto px-6 py-24 text-center space-y-4",
            h1 { class: "text-4xl font-bold", "Page not found" }
            p {
                class: "text-muted-foreground",
                "There is nothing at "
                code { class: "px-1 bg-muted rounded", "{path}" }
                "."
            }
            Link {
                to: Route::Home {},
                class: "text-blue-500 hover:underline",
                "← Back to home"
            }
        }
    }
}
