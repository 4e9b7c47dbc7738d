//! Application state for dependency injection.

use std::sync::Arc;

use film_service_lib::FilmService;
use user_service_lib::UserService;

use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub films: Arc<dyn FilmService>,
    pub users: Arc<dyn UserService>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        films: Arc<dyn FilmService>,
        users: Arc<dyn UserService>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            films,
            users,
            config,
        }
    }

    /// State with empty in-memory stores.
    pub fn in_memory(config: GatewayConfig) -> Self {
        Self::new(
            film_service_lib::in_memory(),
            user_service_lib::in_memory(),
            config,
        )
    }
}
