//! Caching infrastructure for the service layer.
//!
//! This module provides the Cache Port with two interchangeable backends:
//! an in-process map and Redis. Values cross the boundary as JSON strings,
//! so backends never need to know an entity's shape.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;
mod redis_cache;

pub use cache_interface::{Cache, CacheExt, DEFAULT_TTL};
pub use memory_cache::MemoryCache;
pub use redis_cache::RedisCache;
