//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own adapter (dto, handlers, routes); `router`
//! wires them together behind the shared transport layers.

pub mod calculator;
pub mod error;
pub mod estimation;
pub mod health;
pub mod leads;
pub mod middleware;
pub mod onboarding;
pub mod router;

pub use error::{domain_error_response, ErrorResponse};
pub use router::{api_router, build_router, AppServices, WiringError};
