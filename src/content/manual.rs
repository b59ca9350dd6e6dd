// Network File Eraser help manual content
// One ManualPage per manual route; FAQ entries are rendered as an accordion

use super::{FaqEntry, ManualPage, ManualSection};

pub const QUICK_OVERVIEW: ManualPage = ManualPage {
    slug: "quick-overview",
    title: "Quick Overview",
    subtitle: "What D-Secure Network File Eraser does and how a typical erasure runs.",
    sections: &[
        ManualSection::text("What It Is", &[
            "D-Secure Network File Eraser is a Windows application that permanently erases files, folders and usage traces on the local computer and on computers joined to an Active Directory domain.",
            "Erased data is overwritten with the selected pattern before it is removed, so it cannot be recovered by undelete utilities or forensic tools.",
        ]),
        ManualSection {
            heading: "A Typical Workflow",
            paragraphs: &[],
            bullets: &[],
            steps: &[
                "Install the application on an administrator workstation.",
                "Activate your license with the key sent to you by email.",
                "Connect to your Active Directory domain.",
                "Select computers and the items to erase.",
                "Choose an erasure algorithm and start, or schedule the task.",
                "Review and export the erasure report.",
            ],
            note: None,
        },
        ManualSection {
            heading: "What You Can Erase",
            paragraphs: &[],
            bullets: &[
                "Files and folders",
                "Recycle bin contents",
                "Unused disk space",
                "Internet activity such as history, cookies and cache",
                "System traces and application traces",
            ],
            steps: &[],
            note: None,
        },
    ],
};

pub const INSTALLATION: ManualPage = ManualPage {
    slug: "installation",
    title: "Installation",
    subtitle: "System requirements and the steps to install Network File Eraser.",
    sections: &[
        ManualSection {
            heading: "System Requirements",
            paragraphs: &[],
            bullets: &[
                "Windows 10, Windows 11 or Windows Server 2012 R2 and later (64-bit)",
                "Dual-core processor, 4 GB RAM",
                "500 MB free disk space",
                "Microsoft .NET Framework 4.8",
                "Administrator rights on the console computer",
                "Domain administrator credentials for network erasure",
            ],
            steps: &[],
            note: None,
        },
        ManualSection {
            heading: "Installing the Application",
            paragraphs: &["The installer sets up the console, the bundled MariaDB database used for reports and the remote erasure agent package."],
            bullets: &[],
            steps: &[
                "Run the downloaded setup file as administrator.",
                "Accept the license agreement.",
                "Choose the installation folder or keep the default.",
                "Enter a password for the local report database.",
                "Click Install and wait for setup to finish.",
                "Launch Network File Eraser from the Start menu.",
            ],
            note: Some("Keep the database password safe. It is needed when moving the installation to another computer."),
        },
        ManualSection::text("Uninstalling", &[
            "Use Apps & Features in Windows Settings. Reports stored in the local database are kept unless you choose to remove them during uninstallation.",
        ]),
    ],
};

pub const LICENSING: ManualPage = ManualPage {
    slug: "licensing",
    title: "Licensing",
    subtitle: "How licenses are activated, consumed and tracked.",
    sections: &[
        ManualSection {
            heading: "Activating a License",
            paragraphs: &[],
            bullets: &[],
            steps: &[
                "Open the application and go to Settings > License.",
                "Enter the license key from your purchase email.",
                "Click Activate. The application contacts the licensing server and downloads your entitlement.",
            ],
            note: Some("Offline activation is available on request through D-Secure support."),
        },
        ManualSection::text("How Licenses Are Consumed", &[
            "One license is consumed each time a computer is erased, whether locally or over the network. Re-erasing the same computer in a later task consumes another license.",
            "Licenses do not expire. Unused licenses remain in your pool until they are consumed.",
        ]),
        ManualSection {
            heading: "Checking License Usage",
            paragraphs: &["The license panel shows:"],
            bullets: &[
                "Total licenses purchased",
                "Licenses consumed",
                "Licenses remaining",
                "The date of the last synchronisation with the licensing server",
            ],
            steps: &[],
            note: None,
        },
    ],
};

pub const USER_INTERFACE: ManualPage = ManualPage {
    slug: "user-interface",
    title: "User Interface",
    subtitle: "A tour of the main window.",
    sections: &[
        ManualSection {
            heading: "Main Window",
            paragraphs: &["The main window is split into three areas:"],
            bullets: &[
                "The navigation pane on the left with Erase, Schedule, Reports and Settings",
                "The work area in the centre, showing the selected module",
                "The status bar at the bottom with license count and domain connection state",
            ],
            steps: &[],
            note: None,
        },
        ManualSection::text("Erase Module", &[
            "The Erase module lists the erasure categories as tabs. Add items to the erasure list, pick an algorithm from the drop-down and press Erase Now.",
        ]),
        ManualSection::text("Toolbar", &[
            "The toolbar offers quick access to adding files, adding folders, clearing the list, and opening the latest report.",
        ]),
    ],
};

pub const CONNECTING_DOMAIN: ManualPage = ManualPage {
    slug: "connecting-domain",
    title: "Connecting to a Domain",
    subtitle: "Link the console to Active Directory to erase data across your network.",
    sections: &[
        ManualSection {
            heading: "Connecting",
            paragraphs: &[],
            bullets: &[],
            steps: &[
                "Go to Settings > Domain.",
                "Enter the domain name, for example corp.example.com.",
                "Enter the user name and password of a domain administrator.",
                "Click Connect. The computers of the domain are listed once the connection succeeds.",
            ],
            note: Some("Credentials are only used for the session and are not stored unless you enable Remember Credentials."),
        },
        ManualSection {
            heading: "Prerequisites on Domain Computers",
            paragraphs: &[],
            bullets: &[
                "File and Printer Sharing enabled",
                "The admin$ share reachable from the console",
                "Windows Remote Management or RPC allowed through the firewall",
            ],
            steps: &[],
            note: None,
        },
        ManualSection::text("Troubleshooting", &[
            "If a computer shows as Offline, check that it is powered on and reachable by name from the console computer. Computers that were offline are retried the next time the task runs.",
        ]),
    ],
};

pub const ERASING_FILES: ManualPage = ManualPage {
    slug: "erasing-files",
    title: "Erasing Files and Folders",
    subtitle: "Permanently erase selected files, folders, the recycle bin and unused space.",
    sections: &[
        ManualSection {
            heading: "Erasing Files and Folders",
            paragraphs: &[],
            bullets: &[],
            steps: &[
                "Open the Erase module and select the Files & Folders tab.",
                "Click Add Files or Add Folders and select the items.",
                "Choose the erasure algorithm.",
                "Click Erase Now and confirm.",
            ],
            note: Some("Erased items cannot be restored. Double-check the list before confirming."),
        },
        ManualSection::text("Recycle Bin and Unused Space", &[
            "The Recycle Bin tab overwrites everything currently in the recycle bin of every local drive.",
            "The Unused Space tab overwrites the free space of the selected volumes. Depending on the volume size this can take a long time, and the computer remains usable meanwhile.",
        ]),
        ManualSection::text("Erasing on Network Computers", &[
            "With a domain connected, switch the target from This Computer to Network Computers, tick the computers and add paths. Paths are resolved on each remote computer.",
        ]),
    ],
};

pub const ERASING_TRACES: ManualPage = ManualPage {
    slug: "erasing-traces",
    title: "Erasing Traces",
    subtitle: "Remove internet, system and application activity traces.",
    sections: &[
        ManualSection {
            heading: "Internet Activity",
            paragraphs: &["Supported browsers are detected automatically. For each you can erase:"],
            bullets: &[
                "Browsing history",
                "Cookies",
                "Cached files",
                "Saved form data",
                "Download history",
            ],
            steps: &[],
            note: Some("Close the browsers before erasing so that locked files can be removed."),
        },
        ManualSection {
            heading: "System Traces",
            paragraphs: &[],
            bullets: &[
                "Recent documents list",
                "Temporary files",
                "Thumbnail cache",
                "Memory dumps",
                "Windows event logs",
                "Clipboard contents",
            ],
            steps: &[],
            note: None,
        },
        ManualSection::text("Application Traces", &[
            "Recent-file lists and caches of installed applications such as office suites, PDF readers and media players are listed with the application name. Tick the ones to erase.",
        ]),
    ],
};

pub const SCHEDULING_TASKS: ManualPage = ManualPage {
    slug: "scheduling-tasks",
    title: "Scheduling Tasks",
    subtitle: "Automate recurring erasure with the built-in scheduler.",
    sections: &[
        ManualSection {
            heading: "Creating a Schedule",
            paragraphs: &[],
            bullets: &[],
            steps: &[
                "Prepare the erasure list as you would for an immediate erasure.",
                "Click Schedule instead of Erase Now.",
                "Give the task a name and choose Once, Daily, Weekly or Monthly.",
                "Set the start date and time.",
                "Click Save.",
            ],
            note: Some("Scheduled tasks run under the Windows Task Scheduler, so the console does not need to stay open."),
        },
        ManualSection::text("Managing Schedules", &[
            "The Schedule module lists all tasks with their next run time. Tasks can be edited, paused, resumed or deleted. Deleting a schedule does not delete reports of runs that already happened.",
        ]),
    ],
};

pub const REPORT_MANAGEMENT: ManualPage = ManualPage {
    slug: "report-management",
    title: "Report Management",
    subtitle: "View, export and verify erasure reports.",
    sections: &[
        ManualSection {
            heading: "What a Report Contains",
            paragraphs: &[],
            bullets: &[
                "Task name, operator and computer",
                "Start and end time",
                "Erasure algorithm and verification result",
                "The list of erased items",
                "A digital signature",
            ],
            steps: &[],
            note: None,
        },
        ManualSection::text("Viewing and Exporting", &[
            "Open the Reports module to see all reports, newest first. Filter by date, computer or task. Select a report and click Export to save it as PDF or CSV.",
        ]),
        ManualSection::text("Where Reports Are Stored", &[
            "Reports are kept in the local MariaDB database created during installation. With cloud integration enabled, a copy is also uploaded to the D-Secure cloud console.",
        ]),
    ],
};

pub const CLOUD_INTEGRATION: ManualPage = ManualPage {
    slug: "cloud-integration",
    title: "Cloud Integration",
    subtitle: "Synchronise reports and license usage with the D-Secure cloud console.",
    sections: &[
        ManualSection {
            heading: "Enabling Cloud Sync",
            paragraphs: &[],
            bullets: &[],
            steps: &[
                "Go to Settings > Cloud.",
                "Sign in with your D-Secure cloud account.",
                "Turn on Upload Reports.",
            ],
            note: Some("Only report data is uploaded. Erased file contents never leave your network."),
        },
        ManualSection::text("Using the Cloud Console", &[
            "The cloud console shows reports from every installation of your organisation in one place, together with license usage and audit trails.",
        ]),
    ],
};

pub const SETTINGS: ManualPage = ManualPage {
    slug: "settings",
    title: "Settings",
    subtitle: "Configure defaults, reports and the database.",
    sections: &[
        ManualSection {
            heading: "General",
            paragraphs: &[],
            bullets: &[
                "Default erasure algorithm",
                "Verification after erasure on or off",
                "Confirmation prompt before erasing",
                "Windows Explorer context menu integration",
            ],
            steps: &[],
            note: None,
        },
        ManualSection::text("Report Settings", &[
            "Add your company name and logo to reports, choose the default export format and set the technician and validator names printed on each report.",
        ]),
        ManualSection::text("Database", &[
            "Change the database password or point the application at an existing MariaDB server when several consoles should share one report store.",
        ]),
    ],
};

/// Manual pages rendered through the shared view, in sidebar order
pub const MANUAL_PAGES: &[ManualPage] = &[
    QUICK_OVERVIEW,
    INSTALLATION,
    LICENSING,
    USER_INTERFACE,
    CONNECTING_DOMAIN,
    ERASING_FILES,
    ERASING_TRACES,
    SCHEDULING_TASKS,
    REPORT_MANAGEMENT,
    CLOUD_INTEGRATION,
    SETTINGS,
];

pub fn find_page(slug: &str) -> Option<&'static ManualPage> {
    MANUAL_PAGES.iter().find(|page| page.slug == slug)
}

pub const MANUAL_FAQS: &[FaqEntry] = &[
    FaqEntry {
        q: "Can I erase files on a computer that is switched off?",
        a: "No. The computer must be online. Scheduled tasks retry offline computers on their next run.",
    },
    FaqEntry {
        q: "Why does unused space erasure take so long?",
        a: "Every free sector of the volume is overwritten, once per pass of the chosen algorithm. Large, mostly empty disks take the longest.",
    },
    FaqEntry {
        q: "Is a license consumed if erasure fails?",
        a: "No. Licenses are only consumed for computers where the erasure completed.",
    },
    FaqEntry {
        q: "Can I use the software without a domain?",
        a: "Yes. All erasure features work on the local computer without connecting to Active Directory.",
    },
    FaqEntry {
        q: "Where is the database password stored?",
        a: "It is encrypted with Windows DPAPI on the console computer and is never sent to D-Secure.",
    },
    FaqEntry {
        q: "Which algorithm is the fastest?",
        a: "Single-pass algorithms such as NIST 800-88 Clear are the fastest and are accepted by most regulations.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<_> = MANUAL_PAGES.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), MANUAL_PAGES.len());
    }

    #[test]
    fn test_find_page() {
        assert_eq!(find_page("licensing").map(|p| p.title), Some("Licensing"));
        assert!(find_page("missing").is_none());
    }

    #[test]
    fn test_every_page_has_content() {
        for page in MANUAL_PAGES {
            assert!(!page.sections.is_empty(), "{} has no sections", page.slug);
            for section in page.sections {
                let has_body = !section.paragraphs.is_empty()
                    || !section.bullets.is_empty()
                    || !section.steps.is_empty();
                assert!(has_body, "{} / {} is empty", page.slug, section.heading);
            }
        }
    }
}
