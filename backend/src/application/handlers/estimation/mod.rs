//! Estimation handlers.

mod estimate;
mod list_industries;

pub use estimate::{EstimateHandler, EstimateQuery, EstimateQueryResult};
pub use list_industries::{IndustryListing, ListIndustriesHandler};
