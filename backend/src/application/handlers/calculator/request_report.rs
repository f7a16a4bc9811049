//! RequestReportHandler - captures contact details and exports the report.
//!
//! The visitor's details are also forwarded as a report-request lead. A
//! failed delivery is logged but does not withhold the report.

use std::sync::Arc;

use crate::domain::calculator::EstimateReport;
use crate::domain::foundation::{CalculatorSessionId, DomainError, ErrorCode, LeadId};
use crate::domain::leads::{EstimateSummary, Lead, LeadPayload};
use crate::ports::{CalculatorSessionStore, LeadSubmitter};

use super::update_session;

#[derive(Debug, Clone)]
pub struct RequestReportCommand {
    pub session_id: CalculatorSessionId,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct RequestReportResult {
    pub report: EstimateReport,
    pub lead_id: LeadId,
    pub lead_delivered: bool,
}

pub struct RequestReportHandler {
    store: Arc<dyn CalculatorSessionStore>,
    submitter: Arc<dyn LeadSubmitter>,
}

impl RequestReportHandler {
    pub fn new(store: Arc<dyn CalculatorSessionStore>, submitter: Arc<dyn LeadSubmitter>) -> Self {
        Self { store, submitter }
    }

    pub async fn handle(&self, cmd: RequestReportCommand) -> Result<RequestReportResult, DomainError> {
        // 1. Validate and mark the report as sent
        let mut exported = None;
        update_session(self.store.as_ref(), &cmd.session_id, |s| {
            exported = Some(s.request_report(&cmd.email, &cmd.phone)?);
            Ok(())
        })
        .await?;
        let Some(report) = exported else {
            return Err(DomainError::new(ErrorCode::InternalError, "report was not produced"));
        };

        // 2. Forward the lead
        let lead = Lead::new(LeadPayload::ReportRequest {
            contact: report.contact.clone(),
            estimate: EstimateSummary::new(
                report.industry.clone(),
                report.tonnage.tons(),
                &report.result,
            ),
        });

        let lead_delivered = match self.submitter.submit(&lead).await {
            Ok(()) => {
                tracing::info!(
                    session_id = %cmd.session_id,
                    lead_id = %lead.id,
                    submitter = self.submitter.name(),
                    "report request delivered"
                );
                true
            }
            Err(e) => {
                tracing::warn!(
                    session_id = %cmd.session_id,
                    lead_id = %lead.id,
                    error = %e,
                    "report request lead not delivered"
                );
                false
            }
        };

        Ok(RequestReportResult {
            report,
            lead_id: lead.id,
            lead_delivered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::calculator::InMemoryCalculatorSessionStore;
    use crate::adapters::leads::InMemoryLeadSubmitter;
    use crate::domain::calculator::{CalculatorSession, ReportPanel, REPORT_FILENAME};
    use crate::domain::estimation::{estimate, IndustryCatalog, Tonnage};
    use crate::domain::foundation::ErrorCode;
    use crate::ports::LeadDeliveryError;

    async fn session_with_open_form(store: &InMemoryCalculatorSessionStore) -> CalculatorSessionId {
        let mut session = CalculatorSession::new(CalculatorSessionId::new());
        session.set_tonnage_input("5000");
        let ticket = session.begin_calculation().unwrap();
        let result = estimate(IndustryCatalog::standard(), &ticket.request);
        assert!(session.complete_calculation(&ticket, result));
        session.open_contact_form().unwrap();
        let id = *session.id();
        store.insert(session).await.unwrap();
        id
    }

    fn command(id: CalculatorSessionId) -> RequestReportCommand {
        RequestReportCommand {
            session_id: id,
            email: "ops@plant.example".to_string(),
            phone: "+91 98765 43210".to_string(),
        }
    }

    #[tokio::test]
    async fn exports_report_and_forwards_lead() {
        let store = Arc::new(InMemoryCalculatorSessionStore::with_defaults());
        let submitter = Arc::new(InMemoryLeadSubmitter::new());
        let id = session_with_open_form(&store).await;

        let result = RequestReportHandler::new(store.clone(), submitter.clone())
            .handle(command(id))
            .await
            .unwrap();

        assert!(result.lead_delivered);
        assert_eq!(result.report.filename(), REPORT_FILENAME);
        assert!(result.report.render().contains("Estimated Credits: 4250"));

        let leads = submitter.submitted().await;
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].id, result.lead_id);
        assert_eq!(leads[0].payload.kind(), "report_request");
        assert_eq!(leads[0].payload.email(), "ops@plant.example");

        let stored = store.find(&id).await.unwrap().unwrap();
        assert_eq!(stored.report_panel(), ReportPanel::Sent);
    }

    #[tokio::test]
    async fn delivery_failure_still_returns_report() {
        let store = Arc::new(InMemoryCalculatorSessionStore::with_defaults());
        let submitter = Arc::new(InMemoryLeadSubmitter::failing(LeadDeliveryError::Timeout));
        let id = session_with_open_form(&store).await;

        let result = RequestReportHandler::new(store, submitter)
            .handle(command(id))
            .await
            .unwrap();
        assert!(!result.lead_delivered);
        assert_eq!(result.report.tonnage, Tonnage::new(5000.0).unwrap());
    }

    #[tokio::test]
    async fn missing_phone_is_rejected_without_a_lead() {
        let store = Arc::new(InMemoryCalculatorSessionStore::with_defaults());
        let submitter = Arc::new(InMemoryLeadSubmitter::new());
        let id = session_with_open_form(&store).await;

        let mut cmd = command(id);
        cmd.phone = "  ".to_string();
        let err = RequestReportHandler::new(store, submitter.clone())
            .handle(cmd)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EmptyField);
        assert!(submitter.submitted().await.is_empty());
    }

    #[tokio::test]
    async fn report_cannot_be_sent_twice() {
        let store = Arc::new(InMemoryCalculatorSessionStore::with_defaults());
        let submitter = Arc::new(InMemoryLeadSubmitter::new());
        let id = session_with_open_form(&store).await;
        let handler = RequestReportHandler::new(store, submitter);

        handler.handle(command(id)).await.unwrap();
        let err = handler.handle(command(id)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }
}
