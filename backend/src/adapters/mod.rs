//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `calculator` - calculator session storage
//! - `http` - axum REST API
//! - `leads` - lead delivery (log, webhook, in-memory)
//! - `rate_limiter` - fixed-window limits for the lead forms

pub mod calculator;
pub mod http;
pub mod leads;
pub mod rate_limiter;

pub use calculator::InMemoryCalculatorSessionStore;
pub use leads::{InMemoryLeadSubmitter, LoggingLeadSubmitter, WebhookLeadSubmitter};
pub use rate_limiter::InMemoryRateLimiter;
