//! Plain-text estimate report offered as a download.

use crate::domain::estimation::{EstimateResult, Tonnage};
use crate::domain::leads::ContactDetails;

/// Download name of the exported report.
pub const REPORT_FILENAME: &str = "carbon-credit-estimate.txt";

/// MIME type of the exported report.
pub const REPORT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

const REPORT_TITLE: &str = "CarbonBridge - Carbon Credit Estimate";

const DISCLAIMER: &str =
    "Disclaimer: This is an estimate. Actual credits depend on verification and market conditions.";

/// Everything the exported report prints, in its fixed field order.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateReport {
    pub industry: String,
    pub tonnage: Tonnage,
    /// Tonnage as the visitor typed it, trimmed; this is what gets printed.
    pub tonnage_text: String,
    pub result: EstimateResult,
    pub contact: ContactDetails,
}

impl EstimateReport {
    pub fn filename(&self) -> &'static str {
        REPORT_FILENAME
    }

    /// Renders the report body.
    pub fn render(&self) -> String {
        format!(
            "{title}\n\n\
             Industry: {industry}\n\
             Annual CO₂ Reduction: {tons} tons\n\
             Estimated Credits: {credits}\n\
             Estimated Value: {low} - {high}\n\n\
             Contact: {email} | {phone}\n\n\
             {disclaimer}",
            title = REPORT_TITLE,
            industry = self.industry,
            tons = self.tonnage_text,
            credits = self.result.credits,
            low = self.result.value_low,
            high = self.result.value_high,
            email = self.contact.email,
            phone = self.contact.phone,
            disclaimer = DISCLAIMER,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> EstimateReport {
        EstimateReport {
            industry: "Renewable Energy".to_string(),
            tonnage: Tonnage::new(5000.0).unwrap(),
            tonnage_text: "5000".to_string(),
            result: EstimateResult::from_credits(4250),
            contact: ContactDetails::parse("ops@solarfarm.in", "+91 98200 11111").unwrap(),
        }
    }

    #[test]
    fn renders_fields_in_fixed_order() {
        let expected = "CarbonBridge - Carbon Credit Estimate\n\n\
                        Industry: Renewable Energy\n\
                        Annual CO₂ Reduction: 5000 tons\n\
                        Estimated Credits: 4250\n\
                        Estimated Value: ₹1,275,000 - ₹10,625,000\n\n\
                        Contact: ops@solarfarm.in | +91 98200 11111\n\n\
                        Disclaimer: This is an estimate. Actual credits depend on verification and market conditions.";
        assert_eq!(report().render(), expected);
    }

    #[test]
    fn uses_fixed_filename() {
        assert_eq!(report().filename(), "carbon-credit-estimate.txt");
    }

    #[test]
    fn prints_tonnage_as_typed() {
        let report = EstimateReport {
            tonnage: Tonnage::new(1500.5).unwrap(),
            tonnage_text: "1500.50".to_string(),
            ..report()
        };
        assert!(report.render().contains("Annual CO₂ Reduction: 1500.50 tons\n"));
    }
}
