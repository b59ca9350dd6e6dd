//! Static site content
//!
//! Everything here is literal data read by the page components. Nothing is
//! fetched or mutated at runtime.

pub mod file_eraser;
pub mod manual;
pub mod blog;
pub mod seo;

/// Image in a screenshot gallery
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryImage {
    pub url: &'static str,
    pub alt: &'static str,
}

/// Entry of a sticky section nav, `id` matches an anchor on the page
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionNavItem {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub q: &'static str,
    pub a: &'static str,
}

/// Icon + title + text card
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureItem {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureIcon {
    Shield,
    Network,
    Clock,
    Report,
    Trash,
    Cloud,
    Globe,
    Settings,
}

/// Erasure standard listed in the compliance table
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComplianceStandard {
    pub name: &'static str,
    pub passes: u8,
    pub region: &'static str,
}

/// Per-page metadata for the document head
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeoConfig {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    /// Site path, joined to the canonical base
    pub path: &'static str,
}

impl SeoConfig {
    pub fn canonical(&self) -> String {
        crate::config::canonical_url(self.path)
    }
}

/// A help manual page rendered by `ManualPageView`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ManualPage {
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sections: &'static [ManualSection],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ManualSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
    /// Numbered procedure steps
    pub steps: &'static [&'static str],
    pub note: Option<&'static str>,
}

impl ManualSection {
    pub const fn text(heading: &'static str, paragraphs: &'static [&'static str]) -> Self {
        Self {
            heading,
            paragraphs,
            bullets: &[],
            steps: &[],
            note: None,
        }
    }

    pub fn anchor(&self) -> String {
        crate::utils::slugify(self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seo_canonical() {
        let config = SeoConfig {
            title: "t",
            description: "d",
            keywords: "k",
            path: "/blog/degaussing-risks",
        };
        assert_eq!(config.canonical(), "https://dsecuretech.com/blog/degaussing-risks");
    }

    #[test]
    fn test_section_anchor() {
        let section = ManualSection::text("System Requirements", &[]);
        assert_eq!(section.anchor(), "system-requirements");
    }
}
