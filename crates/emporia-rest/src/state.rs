//! Application state for Axum handlers.

use emporia_service::{ProductService, UserService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub product_service: Arc<dyn ProductService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        user_service: Arc<dyn UserService>,
        product_service: Arc<dyn ProductService>,
    ) -> Self {
        Self {
            user_service,
            product_service,
        }
    }
}
