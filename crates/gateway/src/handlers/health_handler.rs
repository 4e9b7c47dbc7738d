//! Health check handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub stores: StoreSizes,
}

/// Number of records held by each store.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreSizes {
    pub films: usize,
    pub users: usize,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - reports store sizes.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let films = state.films.list_films().await.len();
    let users = state.users.list_users().await.len();

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.service.service_name.clone(),
        stores: StoreSizes { films, users },
    })
}
