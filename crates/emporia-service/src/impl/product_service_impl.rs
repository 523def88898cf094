//! Cached product service implementation.

use crate::cache::{cache_keys, Cache, CacheExt, DEFAULT_TTL};
use crate::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::product_service::ProductService;
use async_trait::async_trait;
use emporia_core::{EmporiaError, EmporiaResult, Product, ValidateExt};
use emporia_repository::ProductRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Product service with cache-aside reads and write-through invalidation.
///
/// Same shape as the user service; the by-owner listing is the one read path
/// that deliberately bypasses the cache (an unbounded result set does not fit
/// a single-key entry).
pub struct ProductServiceImpl {
    repository: Arc<dyn ProductRepository>,
    cache: Arc<dyn Cache>,
}

impl ProductServiceImpl {
    /// Creates a new product service.
    pub fn new(repository: Arc<dyn ProductRepository>, cache: Arc<dyn Cache>) -> Self {
        Self { repository, cache }
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn create(&self, request: CreateProductRequest) -> EmporiaResult<ProductResponse> {
        debug!("Creating product: {}", request.name);

        request.validate_request()?;

        let product = Product::new(
            request.name,
            request.description,
            request.price,
            request.user_id,
        );
        let created = self.repository.create(&product).await?;
        let response = ProductResponse::from(created);

        let key = cache_keys::product(response.id);
        if let Err(e) = self.cache.set(&key, &response, DEFAULT_TTL).await {
            warn!("Failed to cache created product {}: {}", response.id, e);
        }

        info!("Product created: {}", response.id);
        Ok(response)
    }

    async fn find_by_id(&self, id: i64) -> EmporiaResult<ProductResponse> {
        if id <= 0 {
            return Err(EmporiaError::validation("Product id must be positive"));
        }

        let key = cache_keys::product(id);
        match self.cache.get::<ProductResponse>(&key).await {
            Ok(Some(cached)) => {
                debug!("Cache hit for product {}", id);
                return Ok(cached);
            }
            Ok(None) => {}
            // A failing cache backend reads as a miss.
            Err(e) => warn!("Cache read failed for product {}: {}", id, e),
        }

        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| EmporiaError::not_found("Product", id))?;
        let response = ProductResponse::from(product);

        if let Err(e) = self.cache.set(&key, &response, DEFAULT_TTL).await {
            warn!("Failed to cache product {}: {}", id, e);
        }

        Ok(response)
    }

    async fn update(
        &self,
        id: i64,
        request: UpdateProductRequest,
    ) -> EmporiaResult<ProductResponse> {
        debug!("Updating product: {}", id);

        if id <= 0 {
            return Err(EmporiaError::validation("Product id must be positive"));
        }
        request.validate_request()?;

        // Existence is the store's call; no read-before-write here. The
        // owning user id is not part of an update and survives unchanged.
        let mut product = Product::new(request.name, request.description, request.price, 0);
        product.id = id;

        let updated = self
            .repository
            .update(&product)
            .await?
            .ok_or_else(|| EmporiaError::not_found("Product", id))?;
        let response = ProductResponse::from(updated);

        if let Err(e) = self
            .cache
            .set(&cache_keys::product(id), &response, DEFAULT_TTL)
            .await
        {
            warn!("Failed to refresh cached product {}: {}", id, e);
        }

        info!("Product updated: {}", id);
        Ok(response)
    }

    async fn delete(&self, id: i64) -> EmporiaResult<()> {
        debug!("Deleting product: {}", id);

        if id <= 0 {
            return Err(EmporiaError::validation("Product id must be positive"));
        }

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(EmporiaError::not_found("Product", id));
        }

        if let Err(e) = self.cache.delete(&cache_keys::product(id)).await {
            warn!("Failed to evict cached product {}: {}", id, e);
        }

        info!("Product deleted: {}", id);
        Ok(())
    }

    async fn find_all(&self) -> EmporiaResult<Vec<ProductResponse>> {
        debug!("Listing products");

        let products = self.repository.find_all().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn find_by_user_id(&self, user_id: i64) -> EmporiaResult<Vec<ProductResponse>> {
        if user_id <= 0 {
            return Err(EmporiaError::validation("User id must be positive"));
        }

        debug!("Listing products for user {}", user_id);

        let products = self.repository.find_by_user_id(user_id).await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }
}

impl std::fmt::Debug for ProductServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductServiceImpl").finish_non_exhaustive()
    }
}
