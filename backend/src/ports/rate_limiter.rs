//! Rate limiting port for the public lead forms.
//!
//! Uses a fixed-window counter per key. Implementations must be safe to
//! share across request tasks.

use async_trait::async_trait;
use std::fmt;

use crate::domain::foundation::Timestamp;

#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Check if request is allowed, consuming a slot if so.
    async fn check(&self, key: RateLimitKey) -> Result<RateLimitResult, RateLimitError>;

    /// Current status without consuming a slot.
    async fn status(&self, key: RateLimitKey) -> Result<RateLimitStatus, RateLimitError>;

    /// Clear the window for a key.
    async fn reset(&self, key: RateLimitKey) -> Result<(), RateLimitError>;
}

/// Key identifying what to rate limit.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct RateLimitKey {
    pub scope: RateLimitScope,
    /// Identifier within the scope (client IP, or "global").
    pub identifier: String,
    /// Optional resource for finer-grained limits (e.g. "leads").
    pub resource: Option<String>,
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum RateLimitScope {
    Global,
    Ip,
}

impl RateLimitKey {
    pub fn global() -> Self {
        Self {
            scope: RateLimitScope::Global,
            identifier: "global".to_string(),
            resource: None,
        }
    }

    pub fn ip(ip: &str) -> Self {
        Self {
            scope: RateLimitScope::Ip,
            identifier: ip.to_string(),
            resource: None,
        }
    }

    /// Per-IP key for a specific resource.
    pub fn ip_resource(ip: &str, resource: &str) -> Self {
        Self {
            scope: RateLimitScope::Ip,
            identifier: ip.to_string(),
            resource: Some(resource.to_string()),
        }
    }

    /// Flat storage key, e.g. `ratelimit:ip:10.0.0.1:leads`.
    pub fn storage_key(&self) -> String {
        match &self.resource {
            Some(resource) => format!(
                "ratelimit:{}:{}:{}",
                self.scope, self.identifier, resource
            ),
            None => format!("ratelimit:{}:{}", self.scope, self.identifier),
        }
    }
}

impl RateLimitScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateLimitScope::Global => "global",
            RateLimitScope::Ip => "ip",
        }
    }
}

impl fmt::Display for RateLimitScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub enum RateLimitResult {
    Allowed(RateLimitStatus),
    Denied(RateLimitDenied),
}

impl RateLimitResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitResult::Allowed(_))
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, RateLimitResult::Denied(_))
    }
}

#[derive(Debug, Clone)]
pub struct RateLimitStatus {
    pub limit: u32,
    pub remaining: u32,
    pub reset_at: Timestamp,
    pub window_secs: u32,
}

#[derive(Debug, Clone)]
pub struct RateLimitDenied {
    pub limit: u32,
    /// Seconds until the client should retry, at least 1.
    pub retry_after_secs: u32,
    pub scope: RateLimitScope,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("rate limiter unavailable: {0}")]
    Unavailable(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ip_key_has_no_resource() {
        let key = RateLimitKey::ip("192.168.1.1");
        assert_eq!(key.scope, RateLimitScope::Ip);
        assert!(key.resource.is_none());
        assert_eq!(key.storage_key(), "ratelimit:ip:192.168.1.1");
    }

    #[test]
    fn resource_key_includes_resource() {
        let key = RateLimitKey::ip_resource("10.0.0.1", "leads");
        assert_eq!(key.storage_key(), "ratelimit:ip:10.0.0.1:leads");
    }

    #[test]
    fn global_key_is_shared() {
        assert_eq!(RateLimitKey::global(), RateLimitKey::global());
        assert_eq!(RateLimitKey::global().storage_key(), "ratelimit:global:global");
    }

    #[test]
    fn denied_result_reports_denied() {
        let result = RateLimitResult::Denied(RateLimitDenied {
            limit: 5,
            retry_after_secs: 30,
            scope: RateLimitScope::Ip,
            message: "slow down".to_string(),
        });
        assert!(result.is_denied());
        assert!(!result.is_allowed());
    }
}
