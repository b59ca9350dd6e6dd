// Site configuration
// Scroll tunables, breakpoints and static asset locations

/// Scroll distance (px) past which the file eraser sticky nav is shown
pub const STICKY_NAV_THRESHOLD: f64 = 400.0;

/// A section becomes active this many pixels before its top reaches the viewport top
pub const SECTION_ACTIVATION_LEAD: f64 = 150.0;

/// Height of the sticky header, subtracted from smooth-scroll targets
pub const HEADER_OFFSET: f64 = 100.0;

/// Viewports at least this wide (px) count as desktop
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

/// Static datasheet offered on the file eraser page
pub const DATASHEET_PATH: &str = "/downloads/DataSheetFileEraser.pdf";
pub const DATASHEET_FILE_NAME: &str = "DataSheetFileEraser.pdf";

/// Product demo video shown in the video modal
pub const DEMO_VIDEO_PATH: &str = "/videos/file-eraser-demo.mp4";

/// Base for canonical URLs in page metadata
pub const CANONICAL_BASE: &str = "https://dsecuretech.com";

/// Scroll behaviour settings for pages with a section nav
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    pub sticky_nav_threshold: f64,
    pub section_activation_lead: f64,
    pub header_offset: f64,
    pub desktop_min_width: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            sticky_nav_threshold: STICKY_NAV_THRESHOLD,
            section_activation_lead: SECTION_ACTIVATION_LEAD,
            header_offset: HEADER_OFFSET,
            desktop_min_width: DESKTOP_MIN_WIDTH,
        }
    }
}

impl SiteConfig {
    pub fn is_desktop(&self, viewport_width: f64) -> bool {
        viewport_width >= self.desktop_min_width
    }
}

/// Build the canonical URL for a site path
pub fn canonical_url(path: &str) -> String {
    format!("{}{}", CANONICAL_BASE, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_breakpoint() {
        let config = SiteConfig::default();
        assert!(!config.is_desktop(767.0));
        assert!(config.is_desktop(768.0));
        assert!(config.is_desktop(1440.0));
    }

    #[test]
    fn test_canonical_url() {
        assert_eq!(
            canonical_url("/file-eraser"),
            "https://dsecuretech.com/file-eraser"
        );
    }
}
