//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `LeadSubmitter` - delivery of contact and report-request leads
//! - `CalculatorSessionStore` - short-lived calculator page sessions
//! - `RateLimiter` - fixed-window limits on the public lead forms

mod calculator_session_store;
mod lead_submitter;
mod rate_limiter;

pub use calculator_session_store::{CalculatorSessionStore, SessionUpdate};
pub use lead_submitter::{LeadDeliveryError, LeadSubmitter};
pub use rate_limiter::{
    RateLimitDenied, RateLimitError, RateLimitKey, RateLimitResult, RateLimitScope,
    RateLimitStatus, RateLimiter,
};
