//! Calculator-specific error types.

use thiserror::Error;

use crate::domain::foundation::{CalculatorSessionId, DomainError, ErrorCode, ValidationError};

/// Errors raised by calculator session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    #[error("Calculator session not found: {0}")]
    NotFound(CalculatorSessionId),

    #[error("No estimate has been calculated yet")]
    EstimateMissing,

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CalculatorError {
    pub fn invalid_state(message: impl Into<String>) -> Self {
        CalculatorError::InvalidState(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CalculatorError::NotFound(_) => ErrorCode::SessionNotFound,
            CalculatorError::EstimateMissing => ErrorCode::EstimateMissing,
            CalculatorError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            CalculatorError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}

impl From<CalculatorError> for DomainError {
    fn from(err: CalculatorError) -> Self {
        match err {
            CalculatorError::Validation(inner) => inner.into(),
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}
