use dioxus::prelude::*;

use crate::components::{ManualShell, SeoHead};
use crate::content::seo;
use crate::content::file_eraser::COMPLIANCE_STANDARDS;

#[component]
pub fn HelpAbout() -> Element {
    rsx! {
        SeoHead { config: seo::HELP_ABOUT }
        ManualShell {
            current: "about".to_string(),
            h1 {
                class: "text-4xl font-bold mb-8",
                "About Network File Eraser"
            }

            div {
                class: "space-y-8",
                section {
                    class: "space-y-4",
                    h2 {
                        class: "text-2xl font-semibold",
                        "What is Network File Eraser?"
                    }
                    p {
                        "D-Secure Network File Eraser permanently erases files, folders and system traces on Windows computers, either locally or remotely across an Active Directory domain."
                    }
                    p {
                        "Erased data cannot be recovered by any software or laboratory tool. Every task produces a report that documents what was erased, where, when and with which standard."
                    }
                }

                section {
                    class: "space-y-4",
                    h2 {
                        class: "text-2xl font-semibold",
                        "Editions"
                    }
                    div {
                        class: "grid md:grid-cols-2 gap-4",
                        div {
                            class: "border border-border rounded-lg p-4",
                            h3 { class: "font-semibold mb-2", "Standalone" }
                            p {
                                class: "text-sm text-muted-foreground",
                                "Installed on a single computer. Erases files and traces on that machine only."
                            }
                        }
                        div {
                            class: "border border-border rounded-lg p-4",
                            h3 { class: "font-semibold mb-2", "Network" }
                            p {
                                class: "text-sm text-muted-foreground",
                                "Installed on an admin workstation. Connects to the domain and erases on any number of licensed computers."
                            }
                        }
                    }
                }

                section {
                    class: "space-y-4",
                    h2 {
                        class: "text-2xl font-semibold",
                        "Erasure Standards"
                    }
                    p { "The following algorithms are available in every edition:" }
                    ul {
                        class: "list-disc pl-6 space-y-1",
                        for standard in COMPLIANCE_STANDARDS.iter() {
                            li { key: "{standard.name}", "{standard.name} ({standard.passes})" }
                        }
                    }
                }

                section {
                    class: "space-y-4",
                    h2 {
                        class: "text-2xl font-semibold",
                        "System Requirements"
                    }
                    ul {
                        class: "list-disc pl-6 space-y-1",
                        li { "Windows 10, 11 or Windows Server 2012 and later" }
                        li { "2 GB RAM, 200 MB free disk space" }
                        li { "Domain administrator credentials for network erasure" }
                        li { "Internet connection for license activation" }
                    }
                }
            }
        }
    }
}
