//! Validation utilities.

use crate::{EmporiaError, FieldError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns an `EmporiaError` on failure.
    fn validate_request(&self) -> Result<(), EmporiaError> {
        self.validate().map_err(validation_errors_to_emporia_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `EmporiaError`.
#[must_use]
pub fn validation_errors_to_emporia_error(errors: ValidationErrors) -> EmporiaError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    EmporiaError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct TestRequest {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
    }

    #[test]
    fn test_validate_request_ok() {
        let request = TestRequest {
            name: "widget".to_string(),
        };
        assert!(request.validate_request().is_ok());
    }

    #[test]
    fn test_validate_request_maps_to_validation_error() {
        let request = TestRequest {
            name: String::new(),
        };
        let err = request.validate_request().unwrap_err();
        match err {
            EmporiaError::Validation(msg) => {
                assert!(msg.contains("name"));
                assert!(msg.contains("must not be empty"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }
}
