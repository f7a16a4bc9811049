//! HTTP handlers for estimation endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::application::handlers::estimation::{EstimateHandler, EstimateQuery, ListIndustriesHandler};

use super::dto::{EstimateRequestDto, EstimateResponse, IndustriesResponse};

#[derive(Clone)]
pub struct EstimationHandlers {
    estimate_handler: Arc<EstimateHandler>,
    list_handler: Arc<ListIndustriesHandler>,
}

impl EstimationHandlers {
    pub fn new(estimate_handler: Arc<EstimateHandler>, list_handler: Arc<ListIndustriesHandler>) -> Self {
        Self {
            estimate_handler,
            list_handler,
        }
    }
}

/// GET /api/industries
pub async fn list_industries(State(handlers): State<EstimationHandlers>) -> Json<IndustriesResponse> {
    Json(handlers.list_handler.handle().into())
}

/// POST /api/estimate
///
/// Invalid tonnage is not an error: the response carries `estimate: null`.
pub async fn estimate(
    State(handlers): State<EstimationHandlers>,
    Json(req): Json<EstimateRequestDto>,
) -> Json<EstimateResponse> {
    let query = EstimateQuery {
        industry: req.industry,
        annual_tons: req.annual_tons.into_text(),
    };
    Json(handlers.estimate_handler.handle(query).into())
}
