use dioxus::prelude::*;

use crate::components::icons::FeatureIconView;
use crate::content::FeatureItem;

#[component]
fn FeatureCard(item: FeatureItem) -> Element {
    rsx! {
        div {
            class: "border border-border rounded-xl p-6 bg-card hover:shadow-md transition",
            div {
                class: "w-12 h-12 mb-4 rounded-lg bg-primary/10 text-primary flex items-center justify-center",
                FeatureIconView { icon: item.icon }
            }
            h3 {
                class: "font-semibold text-lg mb-2",
                "{item.title}"
            }
            p {
                class: "text-sm text-muted-foreground",
                "{item.description}"
            }
        }
    }
}

#[component]
pub fn FeatureGrid(items: &'static [FeatureItem]) -> Element {
    rsx! {
        div {
            class: "grid md:grid-cols-2 lg:grid-cols-3 gap-6",
            for item in items.iter() {
                FeatureCard { key: "{item.title}", item: *item }
            }
        }
    }
}
