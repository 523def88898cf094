//! Result type alias for Emporia operations.

use crate::EmporiaError;

/// A specialized `Result` type for Emporia operations.
pub type EmporiaResult<T> = Result<T, EmporiaError>;
