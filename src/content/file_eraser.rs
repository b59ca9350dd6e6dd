// File eraser product page content

use super::{ComplianceStandard, FaqEntry, FeatureIcon, FeatureItem, GalleryImage, SectionNavItem};

/// Sticky nav entries in page order
pub const SECTIONS: &[SectionNavItem] = &[
    SectionNavItem { id: "overview", label: "Overview" },
    SectionNavItem { id: "erase-types", label: "What It Erases" },
    SectionNavItem { id: "features", label: "Features" },
    SectionNavItem { id: "compliance", label: "Compliance" },
    SectionNavItem { id: "gallery", label: "Screenshots" },
    SectionNavItem { id: "faq", label: "FAQ" },
    SectionNavItem { id: "contact", label: "Contact" },
];

macro_rules! screenshot {
    ($n:literal, $alt:literal) => {
        GalleryImage {
            url: concat!("/images/file-eraser/screenshot-", $n, ".webp"),
            alt: $alt,
        }
    };
}

pub const GALLERY_IMAGES: &[GalleryImage] = &[
    screenshot!("01", "Network File Eraser dashboard"),
    screenshot!("02", "Adding files and folders to the erasure list"),
    screenshot!("03", "Choosing an erasure algorithm"),
    screenshot!("04", "Erasure progress view"),
    screenshot!("05", "Erasure completed summary"),
    screenshot!("06", "Recycle bin erasure"),
    screenshot!("07", "Unused disk space erasure"),
    screenshot!("08", "Browser history and cookies selection"),
    screenshot!("09", "System traces selection"),
    screenshot!("10", "Application traces selection"),
    screenshot!("11", "Connecting to an Active Directory domain"),
    screenshot!("12", "Domain computers list"),
    screenshot!("13", "Remote erasure on domain computers"),
    screenshot!("14", "Creating a scheduled task"),
    screenshot!("15", "Scheduled task recurrence options"),
    screenshot!("16", "Scheduled tasks overview"),
    screenshot!("17", "Erasure report list"),
    screenshot!("18", "Erasure report detail"),
    screenshot!("19", "Exporting a report as PDF"),
    screenshot!("20", "Cloud storage integration"),
    screenshot!("21", "General settings"),
    screenshot!("22", "Report customization settings"),
    screenshot!("23", "Database connection settings"),
    screenshot!("24", "License activation"),
    screenshot!("25", "License usage overview"),
    screenshot!("26", "Right-click context menu erasure"),
    screenshot!("27", "Support and diagnostics panel"),
];

pub const ERASE_TYPES: &[FeatureItem] = &[
    FeatureItem {
        icon: FeatureIcon::Trash,
        title: "Files & Folders",
        description: "Erase individual files or whole folder trees beyond recovery, locally or on any computer in your domain.",
    },
    FeatureItem {
        icon: FeatureIcon::Trash,
        title: "Recycle Bin",
        description: "Permanently overwrite everything sitting in the recycle bin instead of just unlinking it.",
    },
    FeatureItem {
        icon: FeatureIcon::Shield,
        title: "Unused Disk Space",
        description: "Wipe the free space of a volume so remnants of previously deleted files cannot be carved back.",
    },
    FeatureItem {
        icon: FeatureIcon::Globe,
        title: "Internet Activity",
        description: "Remove browser history, cookies, cache and saved form data for all major browsers.",
    },
    FeatureItem {
        icon: FeatureIcon::Settings,
        title: "System Traces",
        description: "Clear recent documents, temp files, thumbnail caches, memory dumps and Windows logs.",
    },
    FeatureItem {
        icon: FeatureIcon::Settings,
        title: "Application Traces",
        description: "Erase the recent-file lists and caches left behind by office suites, media players and chat clients.",
    },
];

pub const FEATURES: &[FeatureItem] = &[
    FeatureItem {
        icon: FeatureIcon::Network,
        title: "Network-Wide Erasure",
        description: "Connect to an Active Directory domain and erase data on every joined workstation from one console.",
    },
    FeatureItem {
        icon: FeatureIcon::Clock,
        title: "Scheduled Erasure",
        description: "Run erasure tasks once, daily, weekly or monthly so sensitive data never lingers.",
    },
    FeatureItem {
        icon: FeatureIcon::Report,
        title: "Tamper-Proof Reports",
        description: "Every erasure produces a digitally signed certificate suitable for audits.",
    },
    FeatureItem {
        icon: FeatureIcon::Cloud,
        title: "Cloud Report Sync",
        description: "Keep reports centrally in the D-Secure cloud console alongside your license usage.",
    },
    FeatureItem {
        icon: FeatureIcon::Shield,
        title: "24 Erasure Standards",
        description: "Choose from international algorithms including NIST 800-88, DoD 5220.22-M and Gutmann.",
    },
    FeatureItem {
        icon: FeatureIcon::Settings,
        title: "Context Menu Integration",
        description: "Erase a file straight from Windows Explorer with a right click.",
    },
];

pub const COMPLIANCE_STANDARDS: &[ComplianceStandard] = &[
    ComplianceStandard { name: "NIST 800-88 Clear", passes: 1, region: "USA" },
    ComplianceStandard { name: "NIST 800-88 Purge", passes: 1, region: "USA" },
    ComplianceStandard { name: "DoD 5220.22-M", passes: 3, region: "USA" },
    ComplianceStandard { name: "DoD 5220.22-M (ECE)", passes: 7, region: "USA" },
    ComplianceStandard { name: "US Army AR 380-19", passes: 3, region: "USA" },
    ComplianceStandard { name: "HMG IS5 (Enhanced)", passes: 3, region: "UK" },
    ComplianceStandard { name: "BSI-2011-VS", passes: 7, region: "Germany" },
    ComplianceStandard { name: "German VSITR", passes: 7, region: "Germany" },
    ComplianceStandard { name: "Russian GOST P50739-95", passes: 2, region: "Russia" },
    ComplianceStandard { name: "Australian ISM 2014", passes: 1, region: "Australia" },
    ComplianceStandard { name: "Canadian RCMP TSSIT OPS-II", passes: 7, region: "Canada" },
    ComplianceStandard { name: "Peter Gutmann", passes: 35, region: "International" },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        q: "Can erased files be recovered with forensic tools?",
        a: "No. Files are overwritten according to the selected standard before their directory entries are removed, so no recoverable content remains on the storage.",
    },
    FaqEntry {
        q: "Do I need to install the software on every computer?",
        a: "No. After connecting to your Active Directory domain, the console pushes a lightweight agent to the selected computers and runs erasure remotely.",
    },
    FaqEntry {
        q: "Which erasure standard should I choose?",
        a: "NIST 800-88 Clear is sufficient for most organisations. Choose a multi-pass standard only when a policy or regulator explicitly requires it.",
    },
    FaqEntry {
        q: "How are licenses counted?",
        a: "Each erasure performed on a computer consumes one license from your pool. Licenses are tracked centrally and do not expire.",
    },
    FaqEntry {
        q: "Does erasing files affect the operating system?",
        a: "Only the items you select are erased. The operating system, installed applications and unselected data are left untouched.",
    },
    FaqEntry {
        q: "Can I prove erasure to an auditor?",
        a: "Yes. Each task produces a signed report listing every erased item, the algorithm used, the operator and the verification result.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_ids_are_unique_anchors() {
        let ids: HashSet<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SECTIONS.len());
        for section in SECTIONS {
            assert_eq!(crate::utils::slugify(section.id), section.id);
        }
    }

    #[test]
    fn test_gallery_images() {
        assert_eq!(GALLERY_IMAGES.len(), 27);
        let urls: HashSet<_> = GALLERY_IMAGES.iter().map(|i| i.url).collect();
        assert_eq!(urls.len(), 27);
        assert!(GALLERY_IMAGES.iter().all(|i| !i.alt.is_empty()));
        assert_eq!(GALLERY_IMAGES[0].url, "/images/file-eraser/screenshot-01.webp");
    }

    #[test]
    fn test_standards_have_passes() {
        assert!(COMPLIANCE_STANDARDS.iter().all(|s| s.passes > 0));
        assert!(COMPLIANCE_STANDARDS.iter().any(|s| s.passes == 35));
    }
}
