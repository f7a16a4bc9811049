//! HTTP routes for lead endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list_reasons, submit_contact, LeadHandlers};

/// Routes under `/api/leads`.
pub fn lead_routes(handlers: LeadHandlers) -> Router {
    Router::new()
        .route("/reasons", get(list_reasons))
        .route("/contact", post(submit_contact))
        .with_state(handlers)
}
