//! Rate limit configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Limits for the public endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSettings {
    /// Turn the limiter on or off
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_global_requests_per_minute")]
    pub global_requests_per_minute: u32,

    #[serde(default = "default_ip_requests_per_minute")]
    pub ip_requests_per_minute: u32,

    /// Lead form submissions per client IP per minute
    #[serde(default = "default_lead_requests_per_minute")]
    pub lead_requests_per_minute: u32,

    /// Calculator sessions created per client IP per minute
    #[serde(default = "default_session_requests_per_minute")]
    pub session_requests_per_minute: u32,

    /// Key limits by `X-Forwarded-For` / `X-Real-IP` instead of the peer
    /// address. Enable only behind a proxy that overwrites those headers.
    #[serde(default)]
    pub trust_forwarded_headers: bool,
}

impl RateLimitSettings {
    /// Validate rate limit configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.global_requests_per_minute == 0 {
            return Err(ValidationError::InvalidRateLimit("global requests"));
        }
        if self.ip_requests_per_minute == 0 {
            return Err(ValidationError::InvalidRateLimit("per-IP requests"));
        }
        if self.lead_requests_per_minute == 0 {
            return Err(ValidationError::InvalidRateLimit("lead submissions"));
        }
        if self.session_requests_per_minute == 0 {
            return Err(ValidationError::InvalidRateLimit("session creations"));
        }
        Ok(())
    }
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            global_requests_per_minute: default_global_requests_per_minute(),
            ip_requests_per_minute: default_ip_requests_per_minute(),
            lead_requests_per_minute: default_lead_requests_per_minute(),
            session_requests_per_minute: default_session_requests_per_minute(),
            trust_forwarded_headers: false,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_global_requests_per_minute() -> u32 {
    10_000
}

fn default_ip_requests_per_minute() -> u32 {
    100
}

fn default_lead_requests_per_minute() -> u32 {
    5
}

fn default_session_requests_per_minute() -> u32 {
    30
}
