//! PostgreSQL repository implementations.

mod product_repository;
mod user_repository;

pub use product_repository::PgProductRepository;
pub use user_repository::PgUserRepository;
