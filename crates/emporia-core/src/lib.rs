//! # Emporia Core
//!
//! Core types, domain entities, and error definitions for Emporia.
//! This crate provides the foundational abstractions used across all layers.

pub mod entities;
pub mod error;
pub mod result;
pub mod validation;

pub use entities::*;
pub use error::*;
pub use result::*;
pub use validation::*;
