use dioxus::prelude::*;

use crate::hooks::use_translation_ready;

/// Render children once translations are ready, a skeleton before that
#[component]
pub fn TranslationGate(children: Element) -> Element {
    let ready = use_translation_ready();

    if !ready() {
        return rsx! {
            div {
                class: "max-w-4xl mx-auto px-6 py-12 space-y-4",
                div { class: "h-10 w-2/3 bg-gray-200 dark:bg-gray-800 rounded animate-pulse" }
                div { class: "h-4 w-full bg-gray-200 dark:bg-gray-800 rounded animate-pulse" }
                div { class: "h-4 w-5/6 bg-gray-200 dark:bg-gray-800 rounded animate-pulse" }
                div { class: "h-64 w-full bg-gray-200 dark:bg-gray-800 rounded-xl animate-pulse" }
            }
        };
    }

    rsx! { {children} }
}
