use dioxus::prelude::*;

use crate::components::icons::{CheckIcon, DownloadIcon, PlayIcon};
use crate::components::sticky_section_nav::scroll_to;
use crate::components::{
    ContactForm, FaqAccordion, FeatureGrid, LightboxGallery, SeoHead, StickySectionNav,
    TranslationGate, VideoModal,
};
use crate::config::DEMO_VIDEO_PATH;
use crate::content::file_eraser::{
    COMPLIANCE_STANDARDS, ERASE_TYPES, FAQS, FEATURES, GALLERY_IMAGES, SECTIONS,
};
use crate::content::seo;
use crate::routes::PRICING_PATH;
use crate::stores::i18n::t;

#[component]
pub fn FileEraser() -> Element {
    let tracker = crate::hooks::use_section_tracker(SECTIONS);
    let mut show_video = use_signal(|| false);

    rsx! {
        SeoHead { config: seo::FILE_ERASER }
        StickySectionNav { sections: SECTIONS, tracker }

        TranslationGate {
            // Hero
            section {
                class: "bg-gradient-to-br from-slate-900 to-blue-900 text-white py-24",
                div {
                    class: "max-w-6xl mx-auto px-6 grid lg:grid-cols-2 gap-12 items-center",
                    div {
                        class: "space-y-6",
                        p {
                            class: "text-sm uppercase tracking-widest text-blue-300 font-semibold",
                            "D-Secure Network File Eraser"
                        }
                        h1 {
                            class: "text-4xl md:text-5xl font-bold leading-tight",
                            "Erase Sensitive Files Across Your Entire Network"
                        }
                        p {
                            class: "text-lg text-white/80",
                            "Permanently erase files, folders and activity traces on every domain computer, on demand or on a schedule, with a certificate for each erasure."
                        }
                        div {
                            class: "flex flex-wrap gap-4",
                            a {
                                href: PRICING_PATH,
                                class: "px-6 py-3 bg-blue-500 hover:bg-blue-600 rounded-lg font-semibold transition",
                                {t("cta.get_started")}
                            }
                            button {
                                r#type: "button",
                                class: "inline-flex items-center gap-2 px-6 py-3 border border-white/40 rounded-lg font-semibold hover:bg-white/10 transition",
                                onclick: move |_| show_video.set(true),
                                PlayIcon { class: "w-5 h-5".to_string() }
                                {t("cta.watch_demo")}
                            }
                            button {
                                r#type: "button",
                                class: "inline-flex items-center gap-2 px-6 py-3 border border-white/40 rounded-lg font-semibold hover:bg-white/10 transition",
                                onclick: move |_| download_datasheet(),
                                DownloadIcon { class: "w-5 h-5".to_string() }
                                {t("cta.download_datasheet")}
                            }
                        }
                    }
                    img {
                        src: "{GALLERY_IMAGES[0].url}",
                        alt: "{GALLERY_IMAGES[0].alt}",
                        class: "rounded-xl shadow-2xl border border-white/10",
                    }
                }
            }

            div {
                class: "max-w-7xl mx-auto px-6",

                section {
                    id: "overview",
                    class: "py-20 grid lg:grid-cols-2 gap-12 items-center",
                    div {
                        class: "space-y-4",
                        h2 { class: "text-3xl font-bold", "Why deleting is not enough" }
                        p {
                            class: "text-muted-foreground leading-relaxed",
                            "Deleting a file only removes the reference to it. The data stays on the disk until it happens to be overwritten, and free recovery tools bring it back in minutes."
                        }
                        p {
                            class: "text-muted-foreground leading-relaxed",
                            "Network File Eraser overwrites the content itself using internationally recognised standards, verifies the result and documents it, so the data is gone for good."
                        }
                        button {
                            r#type: "button",
                            class: "text-blue-500 hover:underline font-medium",
                            onclick: move |_| scroll_to("compliance"),
                            "See supported standards →"
                        }
                    }
                    ul {
                        class: "space-y-3",
                        for point in OVERVIEW_POINTS.iter() {
                            li {
                                key: "{point}",
                                class: "flex items-start gap-3",
                                span {
                                    class: "mt-0.5 text-green-600",
                                    CheckIcon { class: "w-5 h-5".to_string() }
                                }
                                span { "{point}" }
                            }
                        }
                    }
                }

                section {
                    id: "erase-types",
                    class: "py-20 space-y-10",
                    SectionHeading {
                        title: "What It Erases",
                        subtitle: "Choose exactly what to remove, from single files to every trace of user activity.",
                    }
                    FeatureGrid { items: ERASE_TYPES }
                }

                section {
                    id: "features",
                    class: "py-20 space-y-10",
                    SectionHeading {
                        title: "Built for IT Teams",
                        subtitle: "Centralised erasure for organisations of any size.",
                    }
                    FeatureGrid { items: FEATURES }
                }

                section {
                    id: "compliance",
                    class: "py-20 space-y-10",
                    SectionHeading {
                        title: "Compliance Standards",
                        subtitle: "Erase according to the standard your policy or regulator requires.",
                    }
                    div {
                        class: "overflow-x-auto border border-border rounded-xl",
                        table {
                            class: "w-full text-sm",
                            thead {
                                class: "bg-muted",
                                tr {
                                    th { class: "text-left px-4 py-3 font-semibold", "Standard" }
                                    th { class: "text-left px-4 py-3 font-semibold", "Passes" }
                                    th { class: "text-left px-4 py-3 font-semibold", "Origin" }
                                }
                            }
                            tbody {
                                for standard in COMPLIANCE_STANDARDS.iter() {
                                    tr {
                                        key: "{standard.name}",
                                        class: "border-t border-border",
                                        td { class: "px-4 py-3 font-medium", "{standard.name}" }
                                        td { class: "px-4 py-3", "{standard.passes}" }
                                        td { class: "px-4 py-3 text-muted-foreground", "{standard.region}" }
                                    }
                                }
                            }
                        }
                    }
                }

                section {
                    id: "gallery",
                    class: "py-20 space-y-10",
                    SectionHeading {
                        title: "Screenshots",
                        subtitle: "Click any screenshot to enlarge it. Use the arrow keys to browse and Escape to close.",
                    }
                    LightboxGallery { images: GALLERY_IMAGES }
                }

                section {
                    id: "faq",
                    class: "py-20 space-y-10 max-w-4xl mx-auto",
                    SectionHeading {
                        title: "Frequently Asked Questions",
                        subtitle: "",
                    }
                    FaqAccordion { entries: FAQS }
                }

                section {
                    id: "contact",
                    class: "py-20 space-y-10 max-w-3xl mx-auto",
                    SectionHeading {
                        title: "Talk to Our Team",
                        subtitle: "Get a demo, a trial license or a quote for your organisation.",
                    }
                    ContactForm {}
                }
            }
        }

        if *show_video.read() {
            VideoModal {
                src: DEMO_VIDEO_PATH.to_string(),
                title: "Network File Eraser demo".to_string(),
                on_close: move |_| show_video.set(false),
            }
        }
    }
}

const OVERVIEW_POINTS: &[&str] = &[
    "Erase locally or on any computer in your Active Directory domain",
    "Run once or on a daily, weekly or monthly schedule",
    "Signed erasure report for every task",
    "Works on HDDs, SSDs and network shares",
    "No agent to pre-install on workstations",
];

#[component]
fn SectionHeading(title: String, subtitle: String) -> Element {
    rsx! {
        div {
            class: "text-center space-y-3",
            h2 { class: "text-3xl font-bold", "{title}" }
            if !subtitle.is_empty() {
                p { class: "text-muted-foreground max-w-2xl mx-auto", "{subtitle}" }
            }
        }
    }
}

fn download_datasheet() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = crate::utils::download::download_datasheet() {
            log::error!("Datasheet download failed: {}", e);
        }
    }
}
