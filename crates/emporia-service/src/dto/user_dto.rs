//! User-related DTOs.

use chrono::{DateTime, Utc};
use emporia_core::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    pub email: String,
}

/// Request to update an existing user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    pub email: String,
}

/// User response DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emporia_core::ValidateExt;

    #[test]
    fn test_create_user_request_valid() {
        let request = CreateUserRequest {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
        };
        assert!(request.validate_request().is_ok());
    }

    #[test]
    fn test_create_user_request_empty_name() {
        let request = CreateUserRequest {
            name: String::new(),
            email: "a@x.com".to_string(),
        };
        assert!(request.validate_request().is_err());
    }

    #[test]
    fn test_user_response_from_entity() {
        let mut user = User::new("Ann".to_string(), "a@x.com".to_string());
        user.id = 1;
        let response = UserResponse::from(user.clone());

        assert_eq!(response.id, 1);
        assert_eq!(response.name, user.name);
        assert_eq!(response.email, user.email);
        assert_eq!(response.created_at, user.created_at);
    }

    #[test]
    fn test_dto_serialization_round_trip() {
        let request = CreateUserRequest {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        let parsed: CreateUserRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, request.name);
        assert_eq!(parsed.email, request.email);
    }
}
