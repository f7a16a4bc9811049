//! Onboarding handlers.

mod progress;

pub use progress::{OnboardingProgressHandler, OnboardingProgressQuery, ProgressPosition};
