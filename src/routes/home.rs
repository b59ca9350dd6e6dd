use dioxus::prelude::*;

use crate::components::{FeatureGrid, SeoHead, TranslationGate};
use crate::content::file_eraser::FEATURES;
use crate::content::seo;
use crate::routes::{Route, CONTACT_PATH, PRICING_PATH, PRODUCTS_PATH};
use crate::stores::i18n::t;

#[component]
pub fn Home() -> Element {
    rsx! {
        SeoHead { config: seo::HOME }
        TranslationGate {
            // Hero
            section {
                class: "bg-gradient-to-b from-blue-50 to-background dark:from-blue-950/40 py-24",
                div {
                    class: "max-w-5xl mx-auto px-6 text-center space-y-6",
                    h1 {
                        class: "text-5xl md:text-6xl font-bold tracking-tight",
                        "Erase Data. Prove It."
                    }
                    p {
                        class: "text-xl text-muted-foreground max-w-3xl mx-auto",
                        "D-Secure erases drives, files and traces permanently across your organisation and gives you a tamper-proof certificate for every erasure."
                    }
                    div {
                        class: "flex flex-wrap justify-center gap-4 pt-4",
                        a {
                            href: PRODUCTS_PATH,
                            class: "px-6 py-3 bg-primary text-primary-foreground rounded-lg font-semibold hover:bg-primary/90 transition",
                            {t("cta.get_started")}
                        }
                        a {
                            href: PRICING_PATH,
                            class: "px-6 py-3 border border-border rounded-lg font-semibold hover:bg-accent transition",
                            {t("nav.pricing")}
                        }
                    }
                }
            }

            // Product spotlight
            section {
                class: "max-w-7xl mx-auto px-6 py-20 space-y-10",
                div {
                    class: "text-center space-y-3",
                    h2 { class: "text-3xl font-bold", "Network File Eraser" }
                    p {
                        class: "text-muted-foreground max-w-2xl mx-auto",
                        "Erase files, folders and usage traces on every computer in your Active Directory domain from a single console."
                    }
                }
                FeatureGrid { items: FEATURES }
                div {
                    class: "text-center",
                    Link {
                        to: Route::FileEraser {},
                        class: "inline-flex items-center gap-2 px-6 py-3 bg-primary text-primary-foreground rounded-lg font-semibold hover:bg-primary/90 transition",
                        "Explore File Eraser"
                    }
                }
            }

            // Resources
            section {
                class: "bg-muted/40 py-20",
                div {
                    class: "max-w-5xl mx-auto px-6 grid md:grid-cols-2 gap-6",
                    Link {
                        to: Route::DegaussingRisksBlog {},
                        class: "block border border-border rounded-xl p-6 bg-card hover:shadow-md transition",
                        p { class: "text-xs uppercase tracking-wide text-primary font-semibold mb-2", "Blog" }
                        h3 { class: "text-xl font-semibold mb-2", "The Hidden Risks of Degaussing" }
                        p { class: "text-sm text-muted-foreground", "Why magnetic wiping fails on SSDs and leaves you without proof." }
                    }
                    Link {
                        to: Route::HelpIndex {},
                        class: "block border border-border rounded-xl p-6 bg-card hover:shadow-md transition",
                        p { class: "text-xs uppercase tracking-wide text-primary font-semibold mb-2", "Help Manual" }
                        h3 { class: "text-xl font-semibold mb-2", "Network File Eraser Guide" }
                        p { class: "text-sm text-muted-foreground", "Installation, licensing, domain setup and everyday use." }
                    }
                }
            }

            // Closing CTA
            section {
                class: "max-w-4xl mx-auto px-6 py-20 text-center space-y-4",
                h2 { class: "text-3xl font-bold", "Ready to retire your degausser?" }
                p {
                    class: "text-muted-foreground",
                    "Talk to our team about certified erasure for your fleet."
                }
                a {
                    href: CONTACT_PATH,
                    class: "inline-block px-6 py-3 bg-primary text-primary-foreground rounded-lg font-semibold hover:bg-primary/90 transition",
                    {t("cta.contact_sales")}
                }
            }
        }
    }
}
