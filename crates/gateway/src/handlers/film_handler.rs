//! Film handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use tracing::{debug, info, warn};

use common::AppResult;
use domain::Film;

use crate::extractors::JsonBody;
use crate::state::AppState;

/// Create film routes
pub fn film_routes() -> Router<AppState> {
    Router::new().route("/", get(list_films).post(create_film).put(update_film))
}

/// List all films
#[utoipa::path(
    get,
    path = "/films",
    tag = "Films",
    responses(
        (status = 200, description = "All films in insertion order", body = Vec<Film>)
    )
)]
pub async fn list_films(State(state): State<AppState>) -> Json<Vec<Film>> {
    let films = state.films.list_films().await;
    debug!(count = films.len(), "Listed films");
    Json(films)
}

/// Add a film
#[utoipa::path(
    post,
    path = "/films",
    tag = "Films",
    request_body = Film,
    responses(
        (status = 201, description = "Film added", body = Film),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_film(
    State(state): State<AppState>,
    JsonBody(film): JsonBody<Film>,
) -> AppResult<(StatusCode, Json<Film>)> {
    match state.films.create_film(film).await {
        Ok(film) => {
            info!(film_id = film.id, name = %film.name, "Film added");
            Ok((StatusCode::CREATED, Json(film)))
        }
        Err(e) => {
            warn!(error = %e, "Film creation rejected");
            Err(e.into())
        }
    }
}

/// Update a film (returns the stored film unchanged)
#[utoipa::path(
    put,
    path = "/films",
    tag = "Films",
    request_body = Film,
    responses(
        (status = 200, description = "Stored film with the given ID", body = Film),
        (status = 400, description = "Missing ID or validation error"),
        (status = 404, description = "Film not found")
    )
)]
pub async fn update_film(
    State(state): State<AppState>,
    JsonBody(film): JsonBody<Film>,
) -> AppResult<Json<Film>> {
    let film_id = film.id;
    match state.films.update_film(film).await {
        Ok(film) => {
            info!(film_id, "Film updated");
            Ok(Json(film))
        }
        Err(e) => {
            warn!(film_id, error = %e, "Film update rejected");
            Err(e.into())
        }
    }
}
