use dioxus::prelude::*;

use crate::components::{ManualShell, SeoHead};
use crate::content::seo;
use crate::routes::CONTACT_PATH;

#[component]
pub fn HelpSupport() -> Element {
    rsx! {
        SeoHead { config: seo::HELP_SUPPORT }
        ManualShell {
            current: "support".to_string(),
            h1 {
                class: "text-4xl font-bold mb-8",
                "Support"
            }

            div {
                class: "space-y-8",
                section {
                    class: "space-y-4",
                    h2 { class: "text-2xl font-semibold", "Contact Technical Support" }
                    p {
                        "Our support engineers answer on business days, usually within one working day. Licensed customers get priority handling."
                    }
                    div {
                        class: "grid md:grid-cols-2 gap-4",
                        div {
                            class: "border border-border rounded-lg p-4",
                            h3 { class: "font-semibold mb-2", "Email" }
                            a {
                                href: "mailto:support@dsecuretech.com",
                                class: "text-blue-500 hover:underline",
                                "support@dsecuretech.com"
                            }
                        }
                        div {
                            class: "border border-border rounded-lg p-4",
                            h3 { class: "font-semibold mb-2", "Contact form" }
                            a {
                                href: CONTACT_PATH,
                                class: "text-blue-500 hover:underline",
                                "Open the contact page"
                            }
                        }
                    }
                }

                section {
                    class: "space-y-4",
                    h2 { class: "text-2xl font-semibold", "What to Include" }
                    ol {
                        class: "list-decimal pl-6 space-y-2",
                        li { "Your license key or order number" }
                        li { "The product version from Help > About" }
                        li { "A description of the problem and the steps that lead to it" }
                        li { "The erasure report or log file, if the problem happened during a task" }
                    }
                }
            }
        }
    }
}
