//! Leads handed to the delivery port.

use serde::Serialize;

use crate::domain::estimation::{EstimateResult, Rupees};
use crate::domain::foundation::{LeadId, Timestamp};

use super::contact::{ContactDetails, ContactForm};

/// Estimate attached to a report request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateSummary {
    pub industry: String,
    pub annual_tons: f64,
    pub credits: u64,
    pub value_low: Rupees,
    pub value_high: Rupees,
}

impl EstimateSummary {
    pub fn new(industry: impl Into<String>, annual_tons: f64, result: &EstimateResult) -> Self {
        Self {
            industry: industry.into(),
            annual_tons,
            credits: result.credits,
            value_low: result.value_low,
            value_high: result.value_high,
        }
    }
}

/// What the visitor submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LeadPayload {
    Contact(ContactForm),
    ReportRequest {
        contact: ContactDetails,
        estimate: EstimateSummary,
    },
}

impl LeadPayload {
    pub fn kind(&self) -> &'static str {
        match self {
            LeadPayload::Contact(_) => "contact",
            LeadPayload::ReportRequest { .. } => "report_request",
        }
    }

    pub fn email(&self) -> &str {
        match self {
            LeadPayload::Contact(form) => form.email.as_str(),
            LeadPayload::ReportRequest { contact, .. } => contact.email.as_str(),
        }
    }
}

/// A captured lead, ready for delivery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lead {
    pub id: LeadId,
    pub received_at: Timestamp,
    #[serde(flatten)]
    pub payload: LeadPayload,
}

impl Lead {
    pub fn new(payload: LeadPayload) -> Self {
        Self {
            id: LeadId::new(),
            received_at: Timestamp::now(),
            payload,
        }
    }
}
