//! # Emporia Service
//!
//! Business logic service layer for Emporia: the cache-aside entity services
//! and the Cache Port they share.

pub mod cache;
pub mod dto;
pub mod product_service;
pub mod user_service;

mod r#impl;

pub use cache::*;
pub use dto::*;
pub use product_service::*;
pub use r#impl::{ProductServiceImpl, UserServiceImpl};
pub use user_service::*;
