//! HTTP middleware for axum.
//!
//! - `rate_limit` - Fixed-window limits on the public write endpoints

pub mod rate_limit;

pub use rate_limit::{rate_limit_middleware, RateLimitGuard};
