//! HTTP adapter for lead capture.

mod dto;
mod handlers;
mod routes;

pub use dto::{ContactRequest, ContactResponse, ReasonsResponse, THANK_YOU_MESSAGE, THANK_YOU_TITLE};
pub use handlers::LeadHandlers;
pub use routes::lead_routes;
