//! # Emporia Repository
//!
//! Storage Port traits and their PostgreSQL implementations.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository> / Arc<dyn ProductRepository>
//! PgUserRepository / PgProductRepository   (SQLx)
//!   ↓
//! PostgreSQL
//! ```

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::DatabasePool;
pub use postgres::{PgProductRepository, PgUserRepository};
pub use traits::*;
