//! Leads module - contact and report-request submissions.

mod contact;
mod form_status;
mod lead;

pub use contact::{ContactDetails, ContactForm, ContactReason, EmailAddress, MAX_MESSAGE_LENGTH};
pub use form_status::FormStatus;
pub use lead::{EstimateSummary, Lead, LeadPayload};
