//! Request and response DTOs for the service layer.

pub mod product_dto;
pub mod user_dto;

pub use product_dto::*;
pub use user_dto::*;
