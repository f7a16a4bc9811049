//! HTTP adapter for calculator sessions.

mod dto;
mod handlers;
mod routes;

pub use dto::{CalculateResponse, ReportRequest, SelectIndustryRequest, SessionView, SetTonnageRequest};
pub use handlers::{CalculatorHandlers, X_LEAD_DELIVERED, X_LEAD_ID};
pub use routes::calculator_routes;
