//! Domain layer - pure business logic with no infrastructure dependencies.
//!
//! - `foundation` - ids, timestamps, errors, the state machine trait
//! - `estimation` - industry factors and the credit estimate
//! - `calculator` - calculator page session and report export
//! - `onboarding` - seller/buyer roadmaps and the step tracker
//! - `leads` - contact and report-request submissions

pub mod calculator;
pub mod estimation;
pub mod foundation;
pub mod leads;
pub mod onboarding;
