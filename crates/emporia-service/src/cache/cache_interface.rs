//! Cache Port trait for abstracted caching operations.

use async_trait::async_trait;
use emporia_core::EmporiaResult;
use std::time::Duration;

/// TTL applied to every cached entity (10 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Cache Port shared by the entity services.
///
/// The miss contract is the same tri-state for every backend:
/// `Ok(Some(_))` is a hit, `Ok(None)` is a miss, and `Err(_)` is a backend
/// failure. Callers fall through to the store on miss and on backend failure
/// identically; a failure must never surface past the service layer.
///
/// Values are JSON strings, keeping the trait dyn-compatible and the backends
/// ignorant of entity shapes.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a raw JSON value from the cache.
    async fn get_raw(&self, key: &str) -> EmporiaResult<Option<String>>;

    /// Sets a raw JSON value in the cache.
    ///
    /// A zero `ttl` stores the value without expiry; it lives until it is
    /// overwritten or deleted.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> EmporiaResult<()>;

    /// Deletes a value from the cache. Deleting an absent key is not an
    /// error; returns `true` if the key existed.
    async fn delete(&self, key: &str) -> EmporiaResult<bool>;
}

/// Extension trait with typed methods for convenience.
#[async_trait]
pub trait CacheExt: Cache {
    /// Gets a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> EmporiaResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Sets a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> EmporiaResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }
}

// Blanket implementation for all Cache implementations
impl<T: Cache + ?Sized> CacheExt for T {}
