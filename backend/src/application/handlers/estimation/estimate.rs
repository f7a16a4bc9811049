//! EstimateHandler - stateless credit estimate for the API.

use crate::domain::estimation::{estimate_from_input, EstimateResult, IndustryCatalog};

/// Query for a one-off estimate.
#[derive(Debug, Clone)]
pub struct EstimateQuery {
    pub industry: String,
    /// Raw tonnage as the visitor typed it.
    pub annual_tons: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstimateQueryResult {
    pub industry: String,
    pub conversion_factor: f64,
    /// False when the default factor was applied.
    pub known_industry: bool,
    /// `None` when the tonnage is not a positive number.
    pub estimate: Option<EstimateResult>,
}

pub struct EstimateHandler {
    catalog: &'static IndustryCatalog,
}

impl EstimateHandler {
    pub fn new(catalog: &'static IndustryCatalog) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: EstimateQuery) -> EstimateQueryResult {
        let industry = query.industry.trim().to_string();
        let estimate = estimate_from_input(self.catalog, &industry, &query.annual_tons);

        tracing::debug!(
            industry = %industry,
            computed = estimate.is_some(),
            "estimate query"
        );

        EstimateQueryResult {
            conversion_factor: self.catalog.factor_for(&industry),
            known_industry: self.catalog.find(&industry).is_some(),
            industry,
            estimate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> EstimateHandler {
        EstimateHandler::new(IndustryCatalog::standard())
    }

    fn query(industry: &str, tons: &str) -> EstimateQuery {
        EstimateQuery {
            industry: industry.to_string(),
            annual_tons: tons.to_string(),
        }
    }

    #[test]
    fn renewable_energy_example() {
        let result = handler().handle(query("Renewable Energy", "5000"));
        let estimate = result.estimate.unwrap();
        assert_eq!(estimate.credits, 4250);
        assert_eq!(estimate.value_low.amount(), 1_275_000);
        assert_eq!(estimate.value_high.amount(), 10_625_000);
        assert!(result.known_industry);
        assert_eq!(result.conversion_factor, 0.85);
    }

    #[test]
    fn unknown_industry_uses_default_factor() {
        let result = handler().handle(query("Mining", "1000"));
        assert!(!result.known_industry);
        assert_eq!(result.conversion_factor, 0.5);
        assert_eq!(result.estimate.unwrap().credits, 500);
    }

    #[test]
    fn invalid_tonnage_has_no_estimate() {
        for tons in ["0", "-10", "abc", ""] {
            let result = handler().handle(query("Transportation", tons));
            assert!(result.estimate.is_none(), "{tons:?} should not compute");
            assert_eq!(result.conversion_factor, 0.35);
        }
    }
}
