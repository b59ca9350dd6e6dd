// Per-page head metadata

use super::SeoConfig;

pub const HOME: SeoConfig = SeoConfig {
    title: "D-Secure | Certified Data Erasure Software",
    description: "Certified data erasure software for drives, files and networks. Erase data permanently and prove it with tamper-proof reports.",
    keywords: "data erasure, data wiping, file eraser, drive eraser, NIST 800-88, DoD 5220.22-M",
    path: "/",
};

pub const FILE_ERASER: SeoConfig = SeoConfig {
    title: "D-Secure File Eraser | Erase Files Across Your Network",
    description: "Permanently erase files, folders and traces on every computer in your Active Directory domain, with scheduling and audit-ready reports.",
    keywords: "file eraser, network file eraser, secure file deletion, erase traces, active directory erasure",
    path: "/file-eraser",
};

pub const DEGAUSSING_BLOG: SeoConfig = SeoConfig {
    title: "The Hidden Risks of Degaussing | D-Secure Blog",
    description: "Why degaussing fails on SSDs and modern drives, and why verifiable software erasure is the safer choice.",
    keywords: "degaussing, degausser, SSD erasure, NIST 800-88, data destruction",
    path: "/blog/degaussing-risks",
};

pub const HELP_INDEX: SeoConfig = SeoConfig {
    title: "Network File Eraser Help Manual | D-Secure",
    description: "Installation, licensing and usage guides for D-Secure Network File Eraser.",
    keywords: "network file eraser manual, d-secure help, file eraser guide",
    path: "/help/network-file-eraser",
};

pub const HELP_ABOUT: SeoConfig = SeoConfig {
    title: "About Network File Eraser | D-Secure Help",
    description: "About D-Secure Network File Eraser, its editions and the standards it implements.",
    keywords: "about network file eraser, d-secure",
    path: "/help/network-file-eraser/about",
};

pub const HELP_FAQ: SeoConfig = SeoConfig {
    title: "Network File Eraser FAQ | D-Secure Help",
    description: "Answers to common questions about D-Secure Network File Eraser.",
    keywords: "network file eraser faq, file eraser questions",
    path: "/help/network-file-eraser/faq",
};

pub const HELP_SUPPORT: SeoConfig = SeoConfig {
    title: "Support | D-Secure Help",
    description: "How to reach D-Secure technical support and what to include in a request.",
    keywords: "d-secure support, file eraser support",
    path: "/help/network-file-eraser/support",
};

/// Metadata for the data-driven manual pages
pub fn manual(slug: &str) -> SeoConfig {
    match slug {
        "quick-overview" => SeoConfig {
            title: "Quick Overview | Network File Eraser Help",
            description: "What Network File Eraser does and how a typical erasure runs.",
            keywords: "file eraser overview, erasure workflow",
            path: "/help/network-file-eraser/quick-overview",
        },
        "installation" => SeoConfig {
            title: "Installation | Network File Eraser Help",
            description: "System requirements and installation steps for Network File Eraser.",
            keywords: "install file eraser, system requirements",
            path: "/help/network-file-eraser/installation",
        },
        "licensing" => SeoConfig {
            title: "Licensing | Network File Eraser Help",
            description: "Activate, consume and track Network File Eraser licenses.",
            keywords: "file eraser license, license activation",
            path: "/help/network-file-eraser/licensing",
        },
        "user-interface" => SeoConfig {
            title: "User Interface | Network File Eraser Help",
            description: "A tour of the Network File Eraser main window.",
            keywords: "file eraser interface, main window",
            path: "/help/network-file-eraser/user-interface",
        },
        "connecting-domain" => SeoConfig {
            title: "Connecting to a Domain | Network File Eraser Help",
            description: "Connect Network File Eraser to Active Directory for network-wide erasure.",
            keywords: "active directory erasure, connect domain",
            path: "/help/network-file-eraser/connecting-domain",
        },
        "erasing-files" => SeoConfig {
            title: "Erasing Files | Network File Eraser Help",
            description: "Erase files, folders, the recycle bin and unused disk space.",
            keywords: "erase files, erase folders, wipe free space",
            path: "/help/network-file-eraser/erasing-files",
        },
        "erasing-traces" => SeoConfig {
            title: "Erasing Traces | Network File Eraser Help",
            description: "Remove internet, system and application traces.",
            keywords: "erase browser history, erase system traces",
            path: "/help/network-file-eraser/erasing-traces",
        },
        "scheduling-tasks" => SeoConfig {
            title: "Scheduling Tasks | Network File Eraser Help",
            description: "Automate recurring erasure tasks.",
            keywords: "scheduled erasure, erasure scheduler",
            path: "/help/network-file-eraser/scheduling-tasks",
        },
        "report-management" => SeoConfig {
            title: "Report Management | Network File Eraser Help",
            description: "View, export and verify erasure reports.",
            keywords: "erasure report, erasure certificate",
            path: "/help/network-file-eraser/report-management",
        },
        "cloud-integration" => SeoConfig {
            title: "Cloud Integration | Network File Eraser Help",
            description: "Synchronise reports with the D-Secure cloud console.",
            keywords: "cloud erasure reports, d-secure cloud",
            path: "/help/network-file-eraser/cloud-integration",
        },
        "settings" => SeoConfig {
            title: "Settings | Network File Eraser Help",
            description: "Configure erasure defaults, reports and the database.",
            keywords: "file eraser settings",
            path: "/help/network-file-eraser/settings",
        },
        _ => HELP_INDEX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::manual::MANUAL_PAGES;

    #[test]
    fn test_every_manual_page_has_its_own_metadata() {
        for page in MANUAL_PAGES {
            let seo = manual(page.slug);
            assert_ne!(seo, HELP_INDEX, "{} falls back to the index metadata", page.slug);
            assert!(seo.path.ends_with(page.slug));
        }
    }
}
