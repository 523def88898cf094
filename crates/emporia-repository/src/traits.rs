//! Storage Port traits consumed by the service layer.

use async_trait::async_trait;
use emporia_core::{EmporiaResult, Product, User};

/// Persistence contract for users.
///
/// Implementations decide how "not found" surfaces: lookups return `None`,
/// `update` returns `None` when no row matched, and `delete` reports whether
/// a row was removed. Backend failures are returned as errors untouched.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user and returns it with its store-assigned id.
    async fn create(&self, user: &User) -> EmporiaResult<User>;

    /// Finds a user by id.
    async fn find_by_id(&self, id: i64) -> EmporiaResult<Option<User>>;

    /// Updates a user's mutable fields, returning the persisted row, or
    /// `None` when no row matched the id.
    async fn update(&self, user: &User) -> EmporiaResult<Option<User>>;

    /// Deletes a user by id. Returns `false` when no row matched.
    async fn delete(&self, id: i64) -> EmporiaResult<bool>;

    /// Returns all users.
    async fn find_all(&self) -> EmporiaResult<Vec<User>>;
}

/// Persistence contract for products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persists a new product and returns it with its store-assigned id.
    async fn create(&self, product: &Product) -> EmporiaResult<Product>;

    /// Finds a product by id.
    async fn find_by_id(&self, id: i64) -> EmporiaResult<Option<Product>>;

    /// Updates a product's mutable fields, returning the persisted row, or
    /// `None` when no row matched the id.
    async fn update(&self, product: &Product) -> EmporiaResult<Option<Product>>;

    /// Deletes a product by id. Returns `false` when no row matched.
    async fn delete(&self, id: i64) -> EmporiaResult<bool>;

    /// Returns all products.
    async fn find_all(&self) -> EmporiaResult<Vec<Product>>;

    /// Returns all products owned by the given user.
    async fn find_by_user_id(&self, user_id: i64) -> EmporiaResult<Vec<Product>>;
}
