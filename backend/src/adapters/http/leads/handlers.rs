//! HTTP handlers for lead endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::leads::SubmitContactHandler;

use super::dto::{ContactRequest, ContactResponse, ReasonsResponse};

#[derive(Clone)]
pub struct LeadHandlers {
    submit_contact_handler: Arc<SubmitContactHandler>,
}

impl LeadHandlers {
    pub fn new(submit_contact_handler: Arc<SubmitContactHandler>) -> Self {
        Self {
            submit_contact_handler,
        }
    }
}

/// POST /api/leads/contact
pub async fn submit_contact(
    State(handlers): State<LeadHandlers>,
    Json(req): Json<ContactRequest>,
) -> Response {
    match handlers.submit_contact_handler.handle(req.into()).await {
        Ok(receipt) => (StatusCode::ACCEPTED, Json(ContactResponse::from(receipt))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/leads/reasons
pub async fn list_reasons() -> impl IntoResponse {
    Json(ReasonsResponse::default())
}
