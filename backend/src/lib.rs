//! CarbonBridge - carbon credit estimation and lead capture service
//!
//! Backs the CarbonBridge site: the industry-based credit estimator, the
//! paced calculator session, the seller/buyer onboarding walkthrough and
//! the contact and report-request lead forms.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
