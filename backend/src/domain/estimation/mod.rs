//! Estimation module - industry factors and the credit estimate.
//!
//! A static table maps each industry to a conversion factor; an estimate is
//! the rounded product of annual tonnage and that factor, valued at two
//! fixed prices per credit.

mod estimate;
mod industry;
mod money;
mod tonnage;

pub use estimate::{
    credits_for, estimate, estimate_from_input, preview_credits, EstimateRequest, EstimateResult,
    PRICE_PER_CREDIT_HIGH, PRICE_PER_CREDIT_LOW,
};
pub use industry::{IndustryCatalog, IndustryProfile, DEFAULT_CONVERSION_FACTOR, DEFAULT_INDUSTRY};
pub use money::{group_thousands, Rupees};
pub use tonnage::Tonnage;
