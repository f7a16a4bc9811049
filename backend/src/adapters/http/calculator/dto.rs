//! DTOs for calculator session endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::estimation::{EstimateResultDto, TonsInput};
use crate::domain::calculator::{CalculationPhase, CalculatorSession, ReportPanel};
use crate::domain::estimation::IndustryCatalog;
use crate::domain::foundation::Timestamp;

/// Everything the calculator page renders for one session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: String,
    pub industry: String,
    pub conversion_factor: f64,
    /// Raw text of the tonnage field.
    pub annual_tons: String,
    /// "~N credits" hint shown while no result is displayed.
    pub preview_credits: Option<u64>,
    pub phase: CalculationPhase,
    pub result: Option<EstimateResultDto>,
    pub report_panel: ReportPanel,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SessionView {
    pub fn new(session: &CalculatorSession, catalog: &IndustryCatalog) -> Self {
        Self {
            id: session.id().to_string(),
            industry: session.industry().to_string(),
            conversion_factor: session.conversion_factor(catalog),
            annual_tons: session.tonnage_input().to_string(),
            preview_credits: session.preview_credits(catalog),
            phase: session.phase(),
            result: session.result().map(EstimateResultDto::from),
            report_panel: session.report_panel(),
            created_at: *session.created_at(),
            updated_at: *session.touched_at(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectIndustryRequest {
    pub industry: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetTonnageRequest {
    pub annual_tons: TonsInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculateResponse {
    /// "completed", "superseded" or "not_computed"
    pub outcome: &'static str,
    pub session: SessionView,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}
