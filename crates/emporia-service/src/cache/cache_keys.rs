//! Cache key generators for consistent key naming.
//!
//! The two entity services share one cache instance, so every key is
//! namespaced by entity kind; the same numeric id can never collide across
//! kinds.

/// Prefix for all cache keys.
const CACHE_PREFIX: &str = "emporia:cache";

/// Generates the cache key for a user by id.
#[must_use]
pub fn user(id: i64) -> String {
    format!("{}:user:{}", CACHE_PREFIX, id)
}

/// Generates the cache key for a product by id.
#[must_use]
pub fn product(id: i64) -> String {
    format!("{}:product:{}", CACHE_PREFIX, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_key_format() {
        assert_eq!(user(7), "emporia:cache:user:7");
    }

    #[test]
    fn test_product_key_format() {
        assert_eq!(product(7), "emporia:cache:product:7");
    }

    #[test]
    fn test_kinds_never_collide() {
        assert_ne!(user(7), product(7));
    }
}
