//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind host: {0}")]
    InvalidHost(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Result delay must be at most 10000 ms")]
    InvalidResultDelay,

    #[error("Session TTL must be positive")]
    InvalidSessionTtl,

    #[error("Session capacity must be positive")]
    InvalidSessionCapacity,

    #[error("Invalid webhook URL: {0}")]
    InvalidWebhookUrl(String),

    #[error("Webhook URL must use HTTPS in production")]
    WebhookMustBeHttps,

    #[error("Rate limit for {0} must be positive")]
    InvalidRateLimit(&'static str),
}
