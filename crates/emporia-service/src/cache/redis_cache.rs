//! Redis-based cache implementation.

use super::Cache;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use emporia_core::{EmporiaError, EmporiaResult};
use std::time::Duration;
use tracing::debug;

/// Redis-backed cache.
///
/// A missing key surfaces as `Ok(None)` (redis nil), so the tri-state miss
/// contract of [`Cache`] holds without conflating a true miss with an
/// unreachable backend.
pub struct RedisCache {
    pool: Pool,
}

impl RedisCache {
    /// Creates a new Redis cache over an existing connection pool.
    #[must_use]
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    async fn conn(&self) -> EmporiaResult<deadpool_redis::Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| EmporiaError::Cache(format!("Failed to get Redis connection: {}", e)))
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get_raw(&self, key: &str) -> EmporiaResult<Option<String>> {
        let mut conn = self.conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| EmporiaError::Cache(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> EmporiaResult<()> {
        let mut conn = self.conn().await?;

        if ttl.is_zero() {
            conn.set::<_, _, ()>(key, value)
                .await
                .map_err(|e| EmporiaError::Cache(format!("Failed to set key '{}': {}", key, e)))?;
            debug!("Cached key '{}' with no expiry", key);
        } else {
            let ttl_secs = ttl.as_secs().max(1);
            conn.set_ex::<_, _, ()>(key, value, ttl_secs)
                .await
                .map_err(|e| EmporiaError::Cache(format!("Failed to set key '{}': {}", key, e)))?;
            debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> EmporiaResult<bool> {
        let mut conn = self.conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| EmporiaError::Cache(format!("Failed to delete key '{}': {}", key, e)))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache").finish_non_exhaustive()
    }
}
