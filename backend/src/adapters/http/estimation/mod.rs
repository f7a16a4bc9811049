//! HTTP adapter for the estimate calculator's stateless endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    EstimateRequestDto, EstimateResponse, EstimateResultDto, IndustriesResponse, IndustryResponse,
    TonsInput,
};
pub use handlers::EstimationHandlers;
pub use routes::estimation_routes;
