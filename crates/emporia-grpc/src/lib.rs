//! # Emporia gRPC
//!
//! gRPC transport adapter using Tonic. Decodes requests, calls the entity
//! services, and maps domain errors onto gRPC status codes.

pub mod proto;
pub mod server;
pub mod services;

pub use server::*;
pub use services::*;
