//! HTTP adapter for the onboarding walkthrough.

mod dto;
mod handlers;
mod routes;

pub use dto::{ProgressParams, ProgressResponse, StepProgress, StepResponse, TrackResponse, TrackTab};
pub use handlers::OnboardingHandlers;
pub use routes::onboarding_routes;
