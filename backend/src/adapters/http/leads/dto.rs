//! DTOs for lead endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::leads::{ContactReceipt, SubmitContactCommand};
use crate::domain::foundation::LeadId;
use crate::domain::leads::{ContactReason, FormStatus};

pub const THANK_YOU_TITLE: &str = "Thank You!";
pub const THANK_YOU_MESSAGE: &str = "We've received your message and will respond soon.";

#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub reason: ContactReason,
    pub message: String,
}

impl From<ContactRequest> for SubmitContactCommand {
    fn from(req: ContactRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            reason: req.reason,
            message: req.message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub lead_id: LeadId,
    pub status: FormStatus,
    pub title: &'static str,
    pub message: &'static str,
}

impl From<ContactReceipt> for ContactResponse {
    fn from(receipt: ContactReceipt) -> Self {
        Self {
            lead_id: receipt.lead_id,
            status: receipt.status,
            title: THANK_YOU_TITLE,
            message: THANK_YOU_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReasonResponse {
    pub value: ContactReason,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReasonsResponse {
    pub reasons: Vec<ReasonResponse>,
    pub default_reason: ContactReason,
}

impl Default for ReasonsResponse {
    fn default() -> Self {
        Self {
            reasons: ContactReason::ALL
                .iter()
                .map(|r| ReasonResponse {
                    value: *r,
                    label: r.label(),
                })
                .collect(),
            default_reason: ContactReason::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_and_phone_are_optional() {
        let req: ContactRequest = serde_json::from_str(
            r#"{"name":"Ravi","email":"ravi@example.com","message":"Hello"}"#,
        )
        .unwrap();
        assert_eq!(req.reason, ContactReason::FaqQuestion);
        assert!(req.phone.is_none());
    }

    #[test]
    fn reasons_list_default_first() {
        let json = serde_json::to_value(ReasonsResponse::default()).unwrap();
        assert_eq!(json["reasons"].as_array().unwrap().len(), 4);
        assert_eq!(json["reasons"][0]["value"], "faq_question");
        assert_eq!(json["default_reason"], "faq_question");
    }
}
