//! Entity service implementations.

mod product_service_impl;
mod user_service_impl;

pub use product_service_impl::ProductServiceImpl;
pub use user_service_impl::UserServiceImpl;
