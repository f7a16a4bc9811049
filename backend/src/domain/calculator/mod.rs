//! Calculator module - session state for the estimate calculator page.

mod errors;
mod report;
mod session;

pub use errors::CalculatorError;
pub use report::{EstimateReport, REPORT_CONTENT_TYPE, REPORT_FILENAME};
pub use session::{CalculationPhase, CalculationTicket, CalculatorSession, ReportPanel};
