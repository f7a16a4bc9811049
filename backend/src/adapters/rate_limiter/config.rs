//! Rate limit configuration types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::RateLimitSettings;

/// Resource name used for the lead form routes.
pub const LEADS_RESOURCE: &str = "leads";

/// Resource name used for calculator session creation.
pub const SESSIONS_RESOURCE: &str = "sessions";

/// Limits for each scope the limiter knows about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Global limit (infrastructure protection).
    pub global: WindowLimits,
    /// Default per-IP limit.
    pub per_ip: WindowLimits,
    /// Per-IP limits for named resources, overriding `per_ip`.
    pub resources: HashMap<String, WindowLimits>,
}

/// A fixed-window limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowLimits {
    pub requests_per_window: u32,
    pub window_secs: u32,
}

impl WindowLimits {
    pub fn per_minute(requests: u32) -> Self {
        Self {
            requests_per_window: requests,
            window_secs: 60,
        }
    }
}

impl RateLimitConfig {
    /// Limits that apply to an IP for `resource` (or the IP default).
    pub fn limits_for_resource(&self, resource: Option<&str>) -> WindowLimits {
        resource
            .and_then(|r| self.resources.get(r))
            .copied()
            .unwrap_or(self.per_ip)
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        let mut resources = HashMap::new();
        resources.insert(LEADS_RESOURCE.to_string(), WindowLimits::per_minute(5));
        resources.insert(SESSIONS_RESOURCE.to_string(), WindowLimits::per_minute(30));

        Self {
            global: WindowLimits::per_minute(10_000),
            per_ip: WindowLimits::per_minute(100),
            resources,
        }
    }
}

impl From<&RateLimitSettings> for RateLimitConfig {
    fn from(settings: &RateLimitSettings) -> Self {
        let mut resources = HashMap::new();
        resources.insert(
            LEADS_RESOURCE.to_string(),
            WindowLimits::per_minute(settings.lead_requests_per_minute),
        );
        resources.insert(
            SESSIONS_RESOURCE.to_string(),
            WindowLimits::per_minute(settings.session_requests_per_minute),
        );

        Self {
            global: WindowLimits::per_minute(settings.global_requests_per_minute),
            per_ip: WindowLimits::per_minute(settings.ip_requests_per_minute),
            resources,
        }
    }
}
