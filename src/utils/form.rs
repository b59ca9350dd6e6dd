/// Contact form state
///
/// Fields are addressed by the input's `name` attribute so one change handler
/// serves every input.
use crate::error::{SiteError, SiteResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Organization,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Organization,
        ContactField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Organization => "organization",
            ContactField::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "organization" => Some(ContactField::Organization),
            "message" => Some(ContactField::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Organization => &self.organization,
            ContactField::Message => &self.message,
        }
    }

    /// Update the field named by an input's `name` attribute
    pub fn set_field(&mut self, name: &str, value: String) -> SiteResult<()> {
        let field = ContactField::from_name(name).ok_or_else(|| SiteError::UnknownFormField {
            name: name.to_string(),
        })?;

        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Organization => &mut self.organization,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
        Ok(())
    }

    /// Submission needs a form-processing backend this site does not have.
    /// Required-field checks are left to the browser.
    pub fn submit(&self) -> SiteResult<()> {
        log::info!("{}", self.submission_summary());
        Err(SiteError::SubmissionUnavailable)
    }

    /// Log line for a submission, free of anything the visitor typed
    fn submission_summary(&self) -> String {
        format!(
            "Contact form submitted ({} chars of message), no backend configured",
            self.message.chars().count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_only_touches_named_field() {
        let mut form = ContactForm {
            email: "it@example.com".to_string(),
            organization: "Example GmbH".to_string(),
            message: "Need a quote".to_string(),
            ..Default::default()
        };
        let before = form.clone();

        form.set_field("name", "Dana".to_string()).unwrap();

        assert_eq!(form.name, "Dana");
        assert_eq!(form.email, before.email);
        assert_eq!(form.organization, before.organization);
        assert_eq!(form.message, before.message);
    }

    #[test]
    fn test_each_field_round_trips_by_name() {
        let mut form = ContactForm::default();
        for field in ContactField::ALL {
            form.set_field(field.as_str(), format!("value for {}", field.as_str())).unwrap();
        }
        for field in ContactField::ALL {
            assert_eq!(form.get(field), format!("value for {}", field.as_str()));
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut form = ContactForm::default();
        let err = form.set_field("phone", "123".to_string()).unwrap_err();
        assert_eq!(err, SiteError::UnknownFormField { name: "phone".to_string() });
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_submit_reports_missing_backend() {
        let form = ContactForm::default();
        assert_eq!(form.submit(), Err(SiteError::SubmissionUnavailable));
    }

    #[test]
    fn test_submission_log_omits_visitor_input() {
        let form = ContactForm {
            name: "Dana Example".to_string(),
            email: "dana@example.com".to_string(),
            organization: "Example GmbH".to_string(),
            message: "Need a quote".to_string(),
        };
        let summary = form.submission_summary();

        assert!(summary.contains("12 chars"));
        for field in ContactField::ALL {
            assert!(!summary.contains(form.get(field)), "{} leaked", field.as_str());
        }
    }
}
