//! User handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use tracing::{debug, info, warn};

use common::AppResult;
use domain::User;

use crate::extractors::JsonBody;
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", get(list_users).post(create_user).put(update_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in insertion order", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    let users = state.users.list_users().await;
    debug!(count = users.len(), "Listed users");
    Json(users)
}

/// Register a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "User registered with an assigned ID", body = User),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(user): JsonBody<User>,
) -> AppResult<(StatusCode, Json<User>)> {
    match state.users.create_user(user).await {
        Ok(user) => {
            info!(user_id = user.id, login = %user.login, "User registered");
            Ok((StatusCode::CREATED, Json(user)))
        }
        Err(e) => {
            warn!(error = %e, "User registration rejected");
            Err(e.into())
        }
    }
}

/// Update a user (returns the stored user unchanged)
#[utoipa::path(
    put,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 200, description = "Stored user with the given ID", body = User),
        (status = 400, description = "Missing ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    JsonBody(user): JsonBody<User>,
) -> AppResult<Json<User>> {
    let user_id = user.id;
    match state.users.update_user(user).await {
        Ok(user) => {
            info!(user_id, "User updated");
            Ok(Json(user))
        }
        Err(e) => {
            warn!(user_id, error = %e, "User update rejected");
            Err(e.into())
        }
    }
}
