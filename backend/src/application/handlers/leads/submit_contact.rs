//! SubmitContactHandler - the landing-page "Get in Touch" form.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, LeadId, StateMachine};
use crate::domain::leads::{ContactForm, ContactReason, FormStatus, Lead, LeadPayload};
use crate::ports::LeadSubmitter;

/// Raw form fields as entered.
#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub reason: ContactReason,
    pub message: String,
}

/// Acknowledgement shown in place of the form.
#[derive(Debug, Clone)]
pub struct ContactReceipt {
    pub lead_id: LeadId,
    pub status: FormStatus,
}

pub struct SubmitContactHandler {
    submitter: Arc<dyn LeadSubmitter>,
}

impl SubmitContactHandler {
    pub fn new(submitter: Arc<dyn LeadSubmitter>) -> Self {
        Self { submitter }
    }

    pub async fn handle(&self, cmd: SubmitContactCommand) -> Result<ContactReceipt, DomainError> {
        let form = ContactForm::new(
            &cmd.name,
            &cmd.email,
            cmd.phone.as_deref(),
            cmd.reason,
            &cmd.message,
        )?;
        let lead = Lead::new(LeadPayload::Contact(form));

        self.submitter.submit(&lead).await.map_err(|e| {
            tracing::error!(
                lead_id = %lead.id,
                submitter = self.submitter.name(),
                error = %e,
                "contact lead delivery failed"
            );
            DomainError::new(ErrorCode::DeliveryFailed, "Your message could not be sent")
                .with_detail("retryable", e.is_retryable().to_string())
        })?;

        let status = FormStatus::Editing.transition_to(FormStatus::Submitted)?;
        tracing::info!(lead_id = %lead.id, reason = ?cmd.reason, "contact lead delivered");

        Ok(ContactReceipt {
            lead_id: lead.id,
            status,
        })
    }
}
