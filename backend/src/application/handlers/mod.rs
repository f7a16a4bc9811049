//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod calculator;
pub mod estimation;
pub mod leads;
pub mod onboarding;

pub use calculator::{
    CalculateEstimateCommand, CalculateEstimateHandler, CalculationOutcome,
    CreateCalculatorSessionHandler, GetCalculatorSessionHandler, OpenContactFormCommand,
    OpenContactFormHandler, RequestReportCommand, RequestReportHandler, RequestReportResult,
    SelectIndustryCommand, SelectIndustryHandler, SetTonnageCommand, SetTonnageHandler,
};
pub use estimation::{
    EstimateHandler, EstimateQuery, EstimateQueryResult, IndustryListing, ListIndustriesHandler,
};
pub use leads::{ContactReceipt, SubmitContactCommand, SubmitContactHandler};
pub use onboarding::{OnboardingProgressHandler, OnboardingProgressQuery, ProgressPosition};
