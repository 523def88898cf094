//! Cached user service implementation.

use crate::cache::{cache_keys, Cache, CacheExt, DEFAULT_TTL};
use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use emporia_core::{EmporiaError, EmporiaResult, User, ValidateExt};
use emporia_repository::UserRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// User service with cache-aside reads and write-through invalidation.
///
/// The store is authoritative: operation success is defined solely by
/// persistence, and every cache interaction is best-effort. A hit is trusted
/// unconditionally until its TTL lapses, so a write whose cache refresh fails
/// can leave a stale entry servable for up to the TTL. That staleness is
/// accepted.
pub struct UserServiceImpl {
    repository: Arc<dyn UserRepository>,
    cache: Arc<dyn Cache>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>, cache: Arc<dyn Cache>) -> Self {
        Self { repository, cache }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create(&self, request: CreateUserRequest) -> EmporiaResult<UserResponse> {
        debug!("Creating user: {}", request.name);

        request.validate_request()?;

        let user = User::new(request.name, request.email);
        let created = self.repository.create(&user).await?;
        let response = UserResponse::from(created);

        let key = cache_keys::user(response.id);
        if let Err(e) = self.cache.set(&key, &response, DEFAULT_TTL).await {
            warn!("Failed to cache created user {}: {}", response.id, e);
        }

        info!("User created: {}", response.id);
        Ok(response)
    }

    async fn find_by_id(&self, id: i64) -> EmporiaResult<UserResponse> {
        if id <= 0 {
            return Err(EmporiaError::validation("User id must be positive"));
        }

        let key = cache_keys::user(id);
        match self.cache.get::<UserResponse>(&key).await {
            Ok(Some(cached)) => {
                debug!("Cache hit for user {}", id);
                return Ok(cached);
            }
            Ok(None) => {}
            // A failing cache backend reads as a miss.
            Err(e) => warn!("Cache read failed for user {}: {}", id, e),
        }

        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| EmporiaError::not_found("User", id))?;
        let response = UserResponse::from(user);

        if let Err(e) = self.cache.set(&key, &response, DEFAULT_TTL).await {
            warn!("Failed to cache user {}: {}", id, e);
        }

        Ok(response)
    }

    async fn update(&self, id: i64, request: UpdateUserRequest) -> EmporiaResult<UserResponse> {
        debug!("Updating user: {}", id);

        if id <= 0 {
            return Err(EmporiaError::validation("User id must be positive"));
        }
        request.validate_request()?;

        // Existence is the store's call; no read-before-write here.
        let mut user = User::new(request.name, request.email);
        user.id = id;

        let updated = self
            .repository
            .update(&user)
            .await?
            .ok_or_else(|| EmporiaError::not_found("User", id))?;
        let response = UserResponse::from(updated);

        if let Err(e) = self
            .cache
            .set(&cache_keys::user(id), &response, DEFAULT_TTL)
            .await
        {
            warn!("Failed to refresh cached user {}: {}", id, e);
        }

        info!("User updated: {}", id);
        Ok(response)
    }

    async fn delete(&self, id: i64) -> EmporiaResult<()> {
        debug!("Deleting user: {}", id);

        if id <= 0 {
            return Err(EmporiaError::validation("User id must be positive"));
        }

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(EmporiaError::not_found("User", id));
        }

        if let Err(e) = self.cache.delete(&cache_keys::user(id)).await {
            warn!("Failed to evict cached user {}: {}", id, e);
        }

        info!("User deleted: {}", id);
        Ok(())
    }

    async fn find_all(&self) -> EmporiaResult<Vec<UserResponse>> {
        debug!("Listing users");

        let users = self.repository.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
