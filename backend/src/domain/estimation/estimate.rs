//! The carbon credit estimate itself.
//!
//! `credits = round(tons × factor)`, valued at fixed low and high unit
//! prices. Everything here is pure and deterministic.

use serde::Serialize;

use super::industry::IndustryCatalog;
use super::money::Rupees;
use super::tonnage::Tonnage;

/// Conservative market price per credit.
pub const PRICE_PER_CREDIT_LOW: Rupees = Rupees::new(300);

/// Optimistic market price per credit.
pub const PRICE_PER_CREDIT_HIGH: Rupees = Rupees::new(2500);

/// Inputs for one estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRequest {
    pub industry: String,
    pub tonnage: Tonnage,
}

impl EstimateRequest {
    pub fn new(industry: impl Into<String>, tonnage: Tonnage) -> Self {
        Self {
            industry: industry.into(),
            tonnage,
        }
    }

    /// Builds a request from raw form input; `None` when the tonnage is not
    /// a positive finite number.
    pub fn from_input(industry: impl Into<String>, tons_input: &str) -> Option<Self> {
        Tonnage::parse(tons_input).map(|tonnage| Self::new(industry, tonnage))
    }
}

/// Derived estimate. Recomputed on every request, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EstimateResult {
    pub credits: u64,
    pub value_low: Rupees,
    pub value_high: Rupees,
}

impl EstimateResult {
    /// Values a credit count at the fixed unit prices.
    pub fn from_credits(credits: u64) -> Self {
        Self {
            credits,
            value_low: Rupees::new(credits.saturating_mul(PRICE_PER_CREDIT_LOW.amount())),
            value_high: Rupees::new(credits.saturating_mul(PRICE_PER_CREDIT_HIGH.amount())),
        }
    }
}

/// Rounds `tons × factor` half-up to a whole credit count.
///
/// Both operands are positive, so `f64::round` (half away from zero) is
/// half-up here. The float-to-int cast saturates.
pub fn credits_for(tonnage: Tonnage, factor: f64) -> u64 {
    (tonnage.tons() * factor).round() as u64
}

/// Estimates credits and value for an industry key, using the fallback
/// factor when the key is unknown.
pub fn estimate(catalog: &IndustryCatalog, request: &EstimateRequest) -> EstimateResult {
    let factor = catalog.factor_for(&request.industry);
    EstimateResult::from_credits(credits_for(request.tonnage, factor))
}

/// Raw-input variant: `None` means "not computed", which is distinct from
/// a zero-credit result.
pub fn estimate_from_input(
    catalog: &IndustryCatalog,
    industry: &str,
    tons_input: &str,
) -> Option<EstimateResult> {
    EstimateRequest::from_input(industry, tons_input).map(|req| estimate(catalog, &req))
}

/// Credit count shown as a live preview before the user calculates.
pub fn preview_credits(catalog: &IndustryCatalog, industry: &str, tons_input: &str) -> Option<u64> {
    Tonnage::parse(tons_input).map(|t| credits_for(t, catalog.factor_for(industry)))
}
