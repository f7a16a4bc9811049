//! HTTP routes for estimation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{estimate, list_industries, EstimationHandlers};

pub fn estimation_routes(handlers: EstimationHandlers) -> Router {
    Router::new()
        .route("/industries", get(list_industries))
        .route("/estimate", post(estimate))
        .with_state(handlers)
}
