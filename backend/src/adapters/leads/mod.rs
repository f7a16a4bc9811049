//! Lead delivery adapters.
//!
//! - `LoggingLeadSubmitter` - structured log line per lead (default)
//! - `WebhookLeadSubmitter` - signed JSON POST to a CRM or automation hook
//! - `InMemoryLeadSubmitter` - keeps leads in memory for tests

mod in_memory;
mod logging;
mod webhook;

pub use in_memory::InMemoryLeadSubmitter;
pub use logging::LoggingLeadSubmitter;
pub use webhook::{sign_payload, WebhookLeadConfig, WebhookLeadSubmitter, LEAD_ID_HEADER, SIGNATURE_HEADER};
