//! Product entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product entity as persisted in the store.
///
/// `user_id` references the owning user; the reference is tracked but not
/// enforced at this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product.
    pub id: i64,

    /// Display name, required to be non-empty.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Unit price, required to be strictly positive.
    pub price: f64,

    /// Owning user id.
    pub user_id: i64,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new unpersisted product with both timestamps set to now.
    #[must_use]
    pub fn new(name: String, description: String, price: f64, user_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            description,
            price,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the entity as updated now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_has_no_id() {
        let product = Product::new("Widget".to_string(), "A widget".to_string(), 9.99, 1);
        assert_eq!(product.id, 0);
        assert_eq!(product.price, 9.99);
        assert_eq!(product.user_id, 1);
        assert_eq!(product.created_at, product.updated_at);
    }
}
