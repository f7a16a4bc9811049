//! Error responses shared by every HTTP adapter.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON error body: `{ code, message, details? }`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        ErrorCode::SessionNotFound | ErrorCode::TrackNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidStateTransition | ErrorCode::EstimateMissing => StatusCode::CONFLICT,
        ErrorCode::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        ErrorCode::DeliveryFailed => StatusCode::BAD_GATEWAY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Converts a domain error into a JSON error response.
pub fn domain_error_response(error: DomainError) -> Response {
    let status = status_for(error.code);
    if status.is_server_error() {
        tracing::error!(code = %error.code, message = %error.message, "request failed");
    }
    let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
        ErrorResponse::internal("An unexpected error occurred")
    } else {
        ErrorResponse::from(&error)
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn validation_errors_map_to_400_with_field() {
        let error: DomainError = ValidationError::empty_field("email").into();
        let body = ErrorResponse::from(&error);
        assert_eq!(body.code, "EMPTY_FIELD");
        assert_eq!(body.details.unwrap()["field"], "email");
        assert_eq!(domain_error_response(error).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let error = DomainError::new(ErrorCode::SessionNotFound, "gone");
        assert_eq!(domain_error_response(error).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn state_errors_map_to_409() {
        assert_eq!(status_for(ErrorCode::EstimateMissing), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorCode::InvalidStateTransition), StatusCode::CONFLICT);
    }

    #[test]
    fn delivery_failure_maps_to_502() {
        let error = DomainError::new(ErrorCode::DeliveryFailed, "webhook down");
        assert_eq!(domain_error_response(error).status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn internal_message_is_not_leaked() {
        let error = DomainError::new(ErrorCode::InternalError, "lock poisoned at store.rs:42");
        let response = domain_error_response(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
