//! Onboarding module - seller and buyer roadmaps with a step tracker.

mod track;
mod tracker;

pub use track::{OnboardingStep, Track};
pub use tracker::{StepState, StepTracker, VisibilityEntry};
