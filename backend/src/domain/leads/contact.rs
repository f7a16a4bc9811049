//! Contact details and the landing-page contact form.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Maximum accepted length for the free-text message.
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// A syntactically plausible email address (`local@domain`, no spaces).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format("email", "contains whitespace"));
        }
        match trimmed.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ValidationError::invalid_format("email", "expected name@domain")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Email plus phone, as captured by the calculator's report form. Both are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: EmailAddress,
    pub phone: String,
}

impl ContactDetails {
    pub fn parse(email: &str, phone: &str) -> Result<Self, ValidationError> {
        let email = EmailAddress::parse(email)?;
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(ValidationError::empty_field("phone"));
        }
        Ok(Self {
            email,
            phone: phone.to_string(),
        })
    }
}

/// Why a visitor is getting in touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactReason {
    #[default]
    FaqQuestion,
    GeneralInquiry,
    Partnership,
    MediaInquiry,
}

impl ContactReason {
    pub const ALL: [ContactReason; 4] = [
        ContactReason::FaqQuestion,
        ContactReason::GeneralInquiry,
        ContactReason::Partnership,
        ContactReason::MediaInquiry,
    ];

    /// Label shown in the reason dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            ContactReason::FaqQuestion => "Submit a question for our FAQ",
            ContactReason::GeneralInquiry => "General inquiry about services",
            ContactReason::Partnership => "Partnership / Collaboration",
            ContactReason::MediaInquiry => "Media / Press inquiry",
        }
    }
}

/// The landing-page contact form after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub reason: ContactReason,
    pub message: String,
}

impl ContactForm {
    /// Validates raw field values. Name, email and message are required;
    /// a blank phone is treated as absent.
    pub fn new(
        name: &str,
        email: &str,
        phone: Option<&str>,
        reason: ContactReason,
        message: &str,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let email = EmailAddress::parse(email)?;
        let message = message.trim();
        if message.is_empty() {
            return Err(ValidationError::empty_field("message"));
        }
        if message.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(ValidationError::out_of_range(
                "message",
                1,
                MAX_MESSAGE_LENGTH as i64,
                message.chars().count() as i64,
            ));
        }
        let phone = phone
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Ok(Self {
            name: name.to_string(),
            email,
            phone,
            reason,
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_plain_address() {
        let email = EmailAddress::parse("  asha@plant.in ").unwrap();
        assert_eq!(email.as_str(), "asha@plant.in");
    }

    #[test]
    fn email_rejects_missing_parts() {
        assert!(EmailAddress::parse("").is_err());
        assert!(EmailAddress::parse("asha").is_err());
        assert!(EmailAddress::parse("@plant.in").is_err());
        assert!(EmailAddress::parse("asha@").is_err());
        assert!(EmailAddress::parse("a@b@c").is_err());
        assert!(EmailAddress::parse("as ha@plant.in").is_err());
    }

    #[test]
    fn contact_details_require_phone() {
        let err = ContactDetails::parse("asha@plant.in", "   ").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("phone"));
    }

    #[test]
    fn contact_details_trim_phone() {
        let details = ContactDetails::parse("asha@plant.in", " +91 98200 00000 ").unwrap();
        assert_eq!(details.phone, "+91 98200 00000");
    }

    #[test]
    fn default_reason_is_faq_question() {
        assert_eq!(ContactReason::default(), ContactReason::FaqQuestion);
        assert_eq!(ContactReason::ALL[0], ContactReason::default());
    }

    #[test]
    fn reason_labels_match_dropdown() {
        assert_eq!(ContactReason::Partnership.label(), "Partnership / Collaboration");
        assert_eq!(ContactReason::MediaInquiry.label(), "Media / Press inquiry");
    }

    #[test]
    fn contact_form_requires_name_email_message() {
        let reason = ContactReason::GeneralInquiry;
        assert!(ContactForm::new("", "a@b.in", None, reason, "hi").is_err());
        assert!(ContactForm::new("Asha", "nope", None, reason, "hi").is_err());
        assert!(ContactForm::new("Asha", "a@b.in", None, reason, "  ").is_err());
    }

    #[test]
    fn contact_form_blank_phone_becomes_none() {
        let form = ContactForm::new(
            "Asha",
            "a@b.in",
            Some("  "),
            ContactReason::Partnership,
            "Let's talk",
        )
        .unwrap();
        assert_eq!(form.phone, None);
        assert_eq!(form.message, "Let's talk");
    }

    #[test]
    fn contact_form_rejects_oversized_message() {
        let message = "x".repeat(MAX_MESSAGE_LENGTH + 1);
        let err = ContactForm::new("Asha", "a@b.in", None, ContactReason::default(), &message)
            .unwrap_err();
        assert_eq!(err.field(), "message");
    }
}
