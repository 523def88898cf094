//! User service trait definition.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use async_trait::async_trait;
use emporia_core::EmporiaResult;

/// User service trait.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Creates a new user.
    async fn create(&self, request: CreateUserRequest) -> EmporiaResult<UserResponse>;

    /// Gets a user by id.
    async fn find_by_id(&self, id: i64) -> EmporiaResult<UserResponse>;

    /// Updates a user.
    async fn update(&self, id: i64, request: UpdateUserRequest) -> EmporiaResult<UserResponse>;

    /// Deletes a user.
    async fn delete(&self, id: i64) -> EmporiaResult<()>;

    /// Lists all users.
    async fn find_all(&self) -> EmporiaResult<Vec<UserResponse>>;
}
