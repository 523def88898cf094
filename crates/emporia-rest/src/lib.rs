//! # Emporia REST
//!
//! REST transport adapter using Axum. Decodes requests, calls the entity
//! services, and maps domain errors onto HTTP status codes.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
