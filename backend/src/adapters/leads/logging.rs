//! Lead submitter that only writes a structured log line.
//!
//! The default delivery when no webhook is configured: leads show up in the
//! service logs for whoever tails them.

use async_trait::async_trait;

use crate::domain::leads::{Lead, LeadPayload};
use crate::ports::{LeadDeliveryError, LeadSubmitter};

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingLeadSubmitter;

impl LoggingLeadSubmitter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LeadSubmitter for LoggingLeadSubmitter {
    async fn submit(&self, lead: &Lead) -> Result<(), LeadDeliveryError> {
        match &lead.payload {
            LeadPayload::Contact(form) => tracing::info!(
                lead_id = %lead.id,
                kind = lead.payload.kind(),
                name = %form.name,
                email = %form.email,
                reason = form.reason.label(),
                message_chars = form.message.chars().count(),
                "lead received"
            ),
            LeadPayload::ReportRequest { contact, estimate } => tracing::info!(
                lead_id = %lead.id,
                kind = lead.payload.kind(),
                email = %contact.email,
                phone = %contact.phone,
                industry = %estimate.industry,
                credits = estimate.credits,
                "lead received"
            ),
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
