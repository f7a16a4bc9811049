//! DTOs for the estimation endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::estimation::{EstimateQueryResult, IndustryListing};
use crate::domain::estimation::{EstimateResult, IndustryProfile, DEFAULT_INDUSTRY};

/// Tonnage as sent by a client: a JSON number or the raw field text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TonsInput {
    Number(f64),
    Text(String),
}

impl TonsInput {
    /// The input as field text, the form the domain parses.
    pub fn into_text(self) -> String {
        match self {
            TonsInput::Number(n) => n.to_string(),
            TonsInput::Text(s) => s,
        }
    }
}

impl Default for TonsInput {
    fn default() -> Self {
        TonsInput::Text(String::new())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryResponse {
    pub name: &'static str,
    pub conversion_factor: f64,
    pub icon: &'static str,
}

impl From<&IndustryProfile> for IndustryResponse {
    fn from(profile: &IndustryProfile) -> Self {
        Self {
            name: profile.name,
            conversion_factor: profile.conversion_factor,
            icon: profile.icon,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustriesResponse {
    pub industries: Vec<IndustryResponse>,
    pub default_industry: &'static str,
}

impl From<IndustryListing> for IndustriesResponse {
    fn from(listing: IndustryListing) -> Self {
        Self {
            industries: listing.industries.iter().map(IndustryResponse::from).collect(),
            default_industry: listing.default_industry,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimateRequestDto {
    #[serde(default = "default_industry")]
    pub industry: String,
    #[serde(default)]
    pub annual_tons: TonsInput,
}

fn default_industry() -> String {
    DEFAULT_INDUSTRY.to_string()
}

/// Estimate figures with their display strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateResultDto {
    pub credits: u64,
    pub value_low: u64,
    pub value_high: u64,
    /// e.g. "₹1,275,000 - ₹10,625,000"
    pub value_range: String,
}

impl From<&EstimateResult> for EstimateResultDto {
    fn from(result: &EstimateResult) -> Self {
        Self {
            credits: result.credits,
            value_low: result.value_low.amount(),
            value_high: result.value_high.amount(),
            value_range: format!("{} - {}", result.value_low, result.value_high),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EstimateResponse {
    pub industry: String,
    pub conversion_factor: f64,
    pub known_industry: bool,
    /// `null` when the tonnage is not a positive number.
    pub estimate: Option<EstimateResultDto>,
}

impl From<EstimateQueryResult> for EstimateResponse {
    fn from(result: EstimateQueryResult) -> Self {
        Self {
            estimate: result.estimate.as_ref().map(EstimateResultDto::from),
            industry: result.industry,
            conversion_factor: result.conversion_factor,
            known_industry: result.known_industry,
        }
    }
}
