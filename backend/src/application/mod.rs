//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change calculator sessions or deliver leads; query
//! handlers are pure reads over the static catalog and roadmaps.

pub mod handlers;

pub use handlers::*;
