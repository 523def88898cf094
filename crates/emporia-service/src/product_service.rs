//! Product service trait definition.

use crate::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use async_trait::async_trait;
use emporia_core::EmporiaResult;

/// Product service trait.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Creates a new product.
    async fn create(&self, request: CreateProductRequest) -> EmporiaResult<ProductResponse>;

    /// Gets a product by id.
    async fn find_by_id(&self, id: i64) -> EmporiaResult<ProductResponse>;

    /// Updates a product.
    async fn update(
        &self,
        id: i64,
        request: UpdateProductRequest,
    ) -> EmporiaResult<ProductResponse>;

    /// Deletes a product.
    async fn delete(&self, id: i64) -> EmporiaResult<()>;

    /// Lists all products.
    async fn find_all(&self) -> EmporiaResult<Vec<ProductResponse>>;

    /// Lists the products owned by a user. Served straight from the store,
    /// never cached.
    async fn find_by_user_id(&self, user_id: i64) -> EmporiaResult<Vec<ProductResponse>>;
}
