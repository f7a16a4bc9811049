//! Rate limiting middleware for the public write endpoints.
//!
//! Checks the global window first, then the caller's IP window for the
//! guarded resource. Status is reported in standard headers:
//! - `X-RateLimit-Limit`: Maximum requests allowed in the window
//! - `X-RateLimit-Remaining`: Requests remaining in the current window
//! - `X-RateLimit-Reset`: Unix timestamp when the window resets
//! - `Retry-After`: Seconds to wait (only on 429 response)

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header::RETRY_AFTER, HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::ErrorCode;
use crate::ports::{RateLimitDenied, RateLimitKey, RateLimitResult, RateLimitStatus, RateLimiter};

/// Key used when no client address is known.
const UNKNOWN_CLIENT: &str = "unknown";

/// Rate limiter middleware state: which limiter, which resource window,
/// and whether proxy headers may name the client.
#[derive(Clone)]
pub struct RateLimitGuard {
    limiter: Arc<dyn RateLimiter>,
    resource: &'static str,
    trust_forwarded_headers: bool,
}

impl RateLimitGuard {
    pub fn new(limiter: Arc<dyn RateLimiter>, resource: &'static str) -> Self {
        Self {
            limiter,
            resource,
            trust_forwarded_headers: false,
        }
    }

    /// Honour `X-Forwarded-For` / `X-Real-IP`. Only safe behind a proxy
    /// that overwrites them.
    pub fn trusting_forwarded_headers(mut self, trust: bool) -> Self {
        self.trust_forwarded_headers = trust;
        self
    }

    /// Same limiter and trust setting, different resource window.
    pub fn for_resource(&self, resource: &'static str) -> Self {
        Self {
            resource,
            ..self.clone()
        }
    }
}

/// Standard rate limit header names.
pub mod headers {
    use super::HeaderName;

    pub static X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
    pub static X_RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
    pub static X_RATELIMIT_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");
}

/// Rejects callers over the global or per-IP resource limit with 429.
///
/// Callers with no known address share one window. A limiter failure lets
/// the request through.
pub async fn rate_limit_middleware(
    State(guard): State<RateLimitGuard>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Response {
    let limiter = &guard.limiter;
    let client_ip = extract_client_ip(
        request.headers(),
        connect_info.as_ref(),
        guard.trust_forwarded_headers,
    )
    .unwrap_or_else(|| {
        tracing::debug!(resource = guard.resource, "no client address, using shared window");
        UNKNOWN_CLIENT.to_string()
    });

    match limiter.check(RateLimitKey::global()).await {
        Ok(RateLimitResult::Denied(denied)) => return rate_limit_response(&denied),
        Ok(RateLimitResult::Allowed(_)) => {}
        Err(e) => tracing::warn!(error = %e, "rate limiter unavailable for global check"),
    }

    let ip_status = match limiter
        .check(RateLimitKey::ip_resource(&client_ip, guard.resource))
        .await
    {
        Ok(RateLimitResult::Denied(denied)) => {
            tracing::info!(
                client_ip = %client_ip,
                resource = guard.resource,
                retry_after_secs = denied.retry_after_secs,
                "rate limit exceeded"
            );
            return rate_limit_response(&denied);
        }
        Ok(RateLimitResult::Allowed(status)) => Some(status),
        Err(e) => {
            tracing::warn!(error = %e, "rate limiter unavailable for IP check");
            None
        }
    };

    let mut response = next.run(request).await;
    if let Some(status) = ip_status {
        add_rate_limit_headers(response.headers_mut(), &status);
    }
    response
}

/// Client IP from the socket, or when `trust_forwarded` is set from
/// `X-Forwarded-For` (first hop), then `X-Real-IP`, then the socket.
fn extract_client_ip(
    headers: &HeaderMap,
    connect_info: Option<&ConnectInfo<SocketAddr>>,
    trust_forwarded: bool,
) -> Option<String> {
    let socket_ip = connect_info.map(|ci| ci.0.ip().to_string());
    if !trust_forwarded {
        return socket_ip;
    }

    let forwarded = headers
        .get("X-Forwarded-For")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());
    if let Some(ip) = forwarded {
        return Some(ip.to_string());
    }

    let real_ip = headers
        .get("X-Real-IP")
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());
    if let Some(ip) = real_ip {
        return Some(ip.to_string());
    }

    socket_ip
}

fn rate_limit_response(denied: &RateLimitDenied) -> Response {
    let body = ErrorResponse {
        code: ErrorCode::RateLimited.to_string(),
        message: denied.message.clone(),
        details: Some(serde_json::json!({
            "scope": denied.scope.as_str(),
            "retry_after_secs": denied.retry_after_secs,
        })),
    };
    let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();

    let headers = response.headers_mut();
    headers.insert(headers::X_RATELIMIT_LIMIT.clone(), HeaderValue::from(denied.limit));
    headers.insert(headers::X_RATELIMIT_REMAINING.clone(), HeaderValue::from(0u32));
    headers.insert(RETRY_AFTER, HeaderValue::from(denied.retry_after_secs));
    response
}

fn add_rate_limit_headers(headers: &mut HeaderMap, status: &RateLimitStatus) {
    headers.insert(headers::X_RATELIMIT_LIMIT.clone(), HeaderValue::from(status.limit));
    headers.insert(headers::X_RATELIMIT_REMAINING.clone(), HeaderValue::from(status.remaining));
    headers.insert(
        headers::X_RATELIMIT_RESET.clone(),
        HeaderValue::from(status.reset_at.as_unix_secs()),
    );
}
