//! HTTP routes for onboarding endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_progress, get_track, OnboardingHandlers};

/// Routes under `/api/onboarding`.
pub fn onboarding_routes(handlers: OnboardingHandlers) -> Router {
    Router::new()
        .route("/:track", get(get_track))
        .route("/:track/progress", get(get_progress))
        .with_state(handlers)
}
