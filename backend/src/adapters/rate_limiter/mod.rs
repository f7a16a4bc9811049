//! Rate limiter adapters.
//!
//! - `InMemoryRateLimiter` - fixed-window counters for a single process

mod config;
mod in_memory;

pub use config::{RateLimitConfig, WindowLimits, LEADS_RESOURCE, SESSIONS_RESOURCE};
pub use in_memory::InMemoryRateLimiter;
