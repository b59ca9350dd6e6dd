//! Site error types
//!
//! Browser glue returns `SiteResult` so components can log failures and keep
//! rendering. Nothing here is fatal to the page.

use std::fmt;

/// Error type shared by the browser helpers, stores and form handling
#[derive(Debug, Clone, PartialEq)]
pub enum SiteError {
    // ==========================================================================
    // DOM Errors
    // ==========================================================================
    WindowUnavailable,
    DocumentUnavailable,
    ElementNotFound { id: String },
    Dom { message: String },

    // ==========================================================================
    // Contact Form Errors
    // ==========================================================================
    UnknownFormField { name: String },
    /// No form-processing backend is wired to this site
    SubmissionUnavailable,

    // ==========================================================================
    // Preference & Locale Errors
    // ==========================================================================
    Storage { message: String },
    LocaleBundle { locale: String, message: String },
}

impl SiteError {
    /// Wrap a JS exception value coming back from `web_sys`
    pub fn dom(value: impl fmt::Debug) -> Self {
        Self::Dom { message: format!("{:?}", value) }
    }
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowUnavailable => write!(f, "Browser window is not available"),
            Self::DocumentUnavailable => write!(f, "Document is not available"),
            Self::ElementNotFound { id } => write!(f, "No element with id '{}'", id),
            Self::Dom { message } => write!(f, "DOM operation failed: {}", message),
            Self::UnknownFormField { name } => write!(f, "Unknown form field '{}'", name),
            Self::SubmissionUnavailable => {
                write!(f, "Online form submission is not available, please use the contact page")
            }
            Self::Storage { message } => write!(f, "Storage error: {}", message),
            Self::LocaleBundle { locale, message } => {
                write!(f, "Failed to load '{}' translations: {}", locale, message)
            }
        }
    }
}

impl std::error::Error for SiteError {}

impl From<gloo_storage::errors::StorageError> for SiteError {
    fn from(err: gloo_storage::errors::StorageError) -> Self {
        Self::Storage { message: err.to_string() }
    }
}

pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SiteError::ElementNotFound { id: "gallery".to_string() };
        assert_eq!(err.to_string(), "No element with id 'gallery'");

        let err = SiteError::UnknownFormField { name: "phone".to_string() };
        assert_eq!(err.to_string(), "Unknown form field 'phone'");

        let err = SiteError::LocaleBundle {
            locale: "de".to_string(),
            message: "EOF".to_string(),
        };
        assert!(err.to_string().contains("'de'"));
    }

    #[test]
    fn test_dom_wraps_debug_output() {
        let err = SiteError::dom("SecurityError");
        assert_eq!(err, SiteError::Dom { message: "\"SecurityError\"".to_string() });
    }
}
