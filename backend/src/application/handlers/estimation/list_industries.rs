//! ListIndustriesHandler - the industry picker contents.

use crate::domain::estimation::{IndustryCatalog, IndustryProfile, DEFAULT_INDUSTRY};

#[derive(Debug, Clone)]
pub struct IndustryListing {
    pub industries: &'static [IndustryProfile],
    pub default_industry: &'static str,
}

pub struct ListIndustriesHandler {
    catalog: &'static IndustryCatalog,
}

impl ListIndustriesHandler {
    pub fn new(catalog: &'static IndustryCatalog) -> Self {
        Self { catalog }
    }

    pub fn handle(&self) -> IndustryListing {
        IndustryListing {
            industries: self.catalog.profiles(),
            default_industry: DEFAULT_INDUSTRY,
        }
    }
}
