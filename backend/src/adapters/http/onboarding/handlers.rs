//! HTTP handlers for onboarding endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::onboarding::{
    OnboardingProgressHandler, OnboardingProgressQuery, ProgressPosition,
};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::onboarding::{Track, VisibilityEntry};

use super::dto::{ProgressParams, ProgressResponse, TrackResponse};

#[derive(Clone, Default)]
pub struct OnboardingHandlers {
    progress_handler: Arc<OnboardingProgressHandler>,
}

impl OnboardingHandlers {
    pub fn new(progress_handler: Arc<OnboardingProgressHandler>) -> Self {
        Self { progress_handler }
    }
}

fn parse_track(raw: &str) -> Result<Track, DomainError> {
    raw.parse::<Track>()
        .map_err(|_| DomainError::new(ErrorCode::TrackNotFound, format!("Unknown track: {}", raw)))
}

/// Parses `"2,3"` into visibility entries.
fn parse_visible(raw: &str) -> Result<Vec<VisibilityEntry>, ValidationError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map(VisibilityEntry::visible)
                .map_err(|_| ValidationError::invalid_format("visible", format!("'{}' is not a step index", s)))
        })
        .collect()
}

fn position_from(params: ProgressParams) -> Result<ProgressPosition, DomainError> {
    if let Some(index) = params.active {
        return Ok(ProgressPosition::Active(index));
    }
    if let Some(visible) = params.visible {
        return Ok(ProgressPosition::Visible(parse_visible(&visible)?));
    }
    if let Some(from) = params.from {
        return Ok(ProgressPosition::SwitchedFrom {
            track: parse_track(&from)?,
            index: params.from_index.unwrap_or(0),
        });
    }
    Ok(ProgressPosition::Start)
}

/// GET /api/onboarding/:track
pub async fn get_track(Path(track): Path<String>) -> Response {
    match parse_track(&track) {
        Ok(track) => (StatusCode::OK, Json(TrackResponse::new(track))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/onboarding/:track/progress
pub async fn get_progress(
    State(handlers): State<OnboardingHandlers>,
    Path(track): Path<String>,
    Query(params): Query<ProgressParams>,
) -> Response {
    let track = match parse_track(&track) {
        Ok(track) => track,
        Err(e) => return domain_error_response(e),
    };
    let position = match position_from(params) {
        Ok(position) => position,
        Err(e) => return domain_error_response(e),
    };

    match handlers
        .progress_handler
        .handle(OnboardingProgressQuery { track, position })
    {
        Ok(tracker) => (StatusCode::OK, Json(ProgressResponse::from(&tracker))).into_response(),
        Err(e) => domain_error_response(e),
    }
}
