//! Product-related DTOs.

use chrono::{DateTime, Utc};
use emporia_core::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(range(exclusive_min = 0.0, message = "Price must be positive"))]
    pub price: f64,

    #[validate(range(min = 1, message = "Owning user id must be positive"))]
    pub user_id: i64,
}

/// Request to update an existing product.
///
/// The owning user is immutable; ownership changes are not an update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(range(exclusive_min = 0.0, message = "Price must be positive"))]
    pub price: f64,
}

/// Product response DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            user_id: product.user_id,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emporia_core::ValidateExt;

    #[test]
    fn test_create_product_request_valid() {
        let request = CreateProductRequest {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 9.99,
            user_id: 1,
        };
        assert!(request.validate_request().is_ok());
    }

    #[test]
    fn test_create_product_request_zero_price() {
        let request = CreateProductRequest {
            name: "Widget".to_string(),
            description: String::new(),
            price: 0.0,
            user_id: 1,
        };
        assert!(request.validate_request().is_err());
    }

    #[test]
    fn test_create_product_request_negative_price() {
        let request = CreateProductRequest {
            name: "Widget".to_string(),
            description: String::new(),
            price: -1.0,
            user_id: 1,
        };
        assert!(request.validate_request().is_err());
    }

    #[test]
    fn test_create_product_request_missing_owner() {
        let request = CreateProductRequest {
            name: "Widget".to_string(),
            description: String::new(),
            price: 9.99,
            user_id: 0,
        };
        assert!(request.validate_request().is_err());
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let parsed: CreateProductRequest =
            serde_json::from_str(r#"{"name":"Widget","price":9.99,"user_id":1}"#).unwrap();
        assert_eq!(parsed.description, "");
    }

    #[test]
    fn test_product_response_from_entity() {
        let mut product = Product::new("Widget".to_string(), "A widget".to_string(), 9.99, 1);
        product.id = 3;
        let response = ProductResponse::from(product.clone());

        assert_eq!(response.id, 3);
        assert_eq!(response.price, 9.99);
        assert_eq!(response.user_id, 1);
    }
}
