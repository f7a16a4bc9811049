//! Onboarding tracks and their steps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One step of an onboarding roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OnboardingStep {
    /// Two-digit label, "01" through "06".
    pub number: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

const SELLER_STEPS: [OnboardingStep; 6] = [
    OnboardingStep {
        number: "01",
        title: "Assess Your Emissions",
        detail: "Conduct a thorough audit of your industrial processes to identify where you're emitting less than your allocated quota or where reduction projects can generate credits.",
    },
    OnboardingStep {
        number: "02",
        title: "Choose a Standard",
        detail: "Select a verification standard — Verra (VCS), Gold Standard, or the Indian Carbon Market (ICM) framework — based on your project type and target buyers.",
    },
    OnboardingStep {
        number: "03",
        title: "Develop Your Project",
        detail: "Design and implement your emission reduction or removal project — from renewable energy installations to methane capture or reforestation.",
    },
    OnboardingStep {
        number: "04",
        title: "Third-Party Verification",
        detail: "An accredited auditor validates your project design and verifies the actual emission reductions achieved over a monitoring period.",
    },
    OnboardingStep {
        number: "05",
        title: "Credit Issuance",
        detail: "Upon successful verification, credits are issued to your registry account. Each credit = one metric ton of CO₂ equivalent reduced.",
    },
    OnboardingStep {
        number: "06",
        title: "Trade on the Market",
        detail: "List credits on exchanges or connect with buyers directly through CarbonBridge. Set your price or accept market rates.",
    },
];

const BUYER_STEPS: [OnboardingStep; 6] = [
    OnboardingStep {
        number: "01",
        title: "Understand Your Footprint",
        detail: "Calculate total GHG emissions across Scope 1, 2, and 3 to understand how many credits you need to offset.",
    },
    OnboardingStep {
        number: "02",
        title: "Set Offset Goals",
        detail: "Define whether you aim for carbon neutrality, net-zero, or partial offset. This determines volume and type of credits needed.",
    },
    OnboardingStep {
        number: "03",
        title: "Select Credit Type",
        detail: "Choose between compliance credits (mandatory markets) or voluntary credits based on your regulatory requirements.",
    },
    OnboardingStep {
        number: "04",
        title: "Due Diligence",
        detail: "Verify credit quality by checking project verification standard, vintage year, additionality, and co-benefits.",
    },
    OnboardingStep {
        number: "05",
        title: "Purchase & Retire",
        detail: "Buy credits through registries or trading platforms. Retire them to officially claim the offset — retired credits cannot be resold.",
    },
    OnboardingStep {
        number: "06",
        title: "Report & Communicate",
        detail: "Document offsets in sustainability reports. Transparent communication builds stakeholder trust and regulatory compliance.",
    },
];

/// Which roadmap the visitor is following.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    #[default]
    Seller,
    Buyer,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::Seller, Track::Buyer];

    pub fn steps(&self) -> &'static [OnboardingStep] {
        match self {
            Track::Seller => &SELLER_STEPS,
            Track::Buyer => &BUYER_STEPS,
        }
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Track::Seller => "For Sellers",
            Track::Buyer => "For Buyers",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Seller => "seller",
            Track::Buyer => "buyer",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Track {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seller" | "sellers" => Ok(Track::Seller),
            "buyer" | "buyers" => Ok(Track::Buyer),
            other => Err(ValidationError::invalid_format(
                "track",
                format!("unknown track '{}'", other),
            )),
        }
    }
}
