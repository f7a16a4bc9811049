//! Industry profiles and the static conversion factor table.

use once_cell::sync::Lazy;
use serde::Serialize;

/// Factor applied when an industry key does not resolve in the catalog.
pub const DEFAULT_CONVERSION_FACTOR: f64 = 0.5;

/// Industry selected when a calculator session starts.
pub const DEFAULT_INDUSTRY: &str = "Renewable Energy";

/// One industry category and the credits it earns per ton of CO₂ reduced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndustryProfile {
    pub name: &'static str,
    pub conversion_factor: f64,
    pub icon: &'static str,
}

/// Immutable lookup table of industry profiles, keyed by name.
#[derive(Debug, Clone)]
pub struct IndustryCatalog {
    profiles: Vec<IndustryProfile>,
}

static STANDARD_CATALOG: Lazy<IndustryCatalog> = Lazy::new(|| IndustryCatalog {
    profiles: vec![
        IndustryProfile {
            name: "Renewable Energy",
            conversion_factor: 0.85,
            icon: "⚡",
        },
        IndustryProfile {
            name: "Waste Management",
            conversion_factor: 0.6,
            icon: "♻️",
        },
        IndustryProfile {
            name: "Industrial Manufacturing",
            conversion_factor: 0.45,
            icon: "🏭",
        },
        IndustryProfile {
            name: "Agriculture & Forestry",
            conversion_factor: 0.7,
            icon: "🌿",
        },
        IndustryProfile {
            name: "Transportation",
            conversion_factor: 0.35,
            icon: "🚛",
        },
        IndustryProfile {
            name: "Construction",
            conversion_factor: 0.4,
            icon: "🏗️",
        },
    ],
});

impl IndustryCatalog {
    /// The six-entry table the site ships with.
    pub fn standard() -> &'static IndustryCatalog {
        &STANDARD_CATALOG
    }

    /// Profiles in display order.
    pub fn profiles(&self) -> &[IndustryProfile] {
        &self.profiles
    }

    /// Exact, case-sensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&IndustryProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Conversion factor for `name`, falling back to
    /// [`DEFAULT_CONVERSION_FACTOR`] for unknown keys.
    pub fn factor_for(&self, name: &str) -> f64 {
        self.find(name)
            .map(|p| p.conversion_factor)
            .unwrap_or(DEFAULT_CONVERSION_FACTOR)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
