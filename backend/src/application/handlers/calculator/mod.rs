//! Calculator session handlers.

mod calculate;
mod create_session;
mod get_session;
mod open_contact_form;
mod request_report;
mod update_inputs;

pub use calculate::{CalculateEstimateCommand, CalculateEstimateHandler, CalculationOutcome};
pub use create_session::CreateCalculatorSessionHandler;
pub use get_session::GetCalculatorSessionHandler;
pub use open_contact_form::{OpenContactFormCommand, OpenContactFormHandler};
pub use request_report::{RequestReportCommand, RequestReportHandler, RequestReportResult};
pub use update_inputs::{
    SelectIndustryCommand, SelectIndustryHandler, SetTonnageCommand, SetTonnageHandler,
};

use crate::domain::calculator::{CalculatorError, CalculatorSession};
use crate::domain::foundation::{CalculatorSessionId, DomainError};
use crate::ports::CalculatorSessionStore;

/// Loads a live session or fails with `SessionNotFound`.
/// Applies `apply` to the stored session atomically.
pub(crate) async fn update_session<F>(
    store: &dyn CalculatorSessionStore,
    id: &CalculatorSessionId,
    apply: F,
) -> Result<CalculatorSession, DomainError>
where
    F: FnOnce(&mut CalculatorSession) -> Result<(), DomainError> + Send,
{
    store.update(id, Box::new(apply)).await
}

pub(crate) async fn load_session(
    store: &dyn CalculatorSessionStore,
    id: &CalculatorSessionId,
) -> Result<CalculatorSession, DomainError> {
    store
        .find(id)
        .await?
        .ok_or_else(|| CalculatorError::NotFound(*id).into())
}
