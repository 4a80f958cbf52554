//! Application state for Axum handlers.

use inventory_service::{AuthService, HealthService, ItemService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub item_service: Arc<dyn ItemService>,
    pub auth_service: Arc<dyn AuthService>,
    pub health_service: Arc<dyn HealthService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        item_service: Arc<dyn ItemService>,
        auth_service: Arc<dyn AuthService>,
        health_service: Arc<dyn HealthService>,
    ) -> Self {
        Self {
            item_service,
            auth_service,
            health_service,
        }
    }
}
