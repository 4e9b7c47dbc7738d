//! Integration tests for API endpoints.
//!
//! Requests go through the full router with fresh in-memory stores.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Local};
use serde_json::{json, Value};
use tower::ServiceExt;

use gateway_lib::config::GatewayConfig;
use gateway_lib::routes::create_router;
use gateway_lib::state::AppState;

// =============================================================================
// Helpers
// =============================================================================

fn app() -> Router {
    create_router(AppState::in_memory(GatewayConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn matrix() -> Value {
    json!({
        "id": 1,
        "name": "Matrix",
        "description": "desc",
        "releaseDate": "1999-03-31",
        "duration": 136
    })
}

fn bob() -> Value {
    json!({
        "email": "a@b.com",
        "login": "bob",
        "name": "",
        "birthday": "1990-01-01"
    })
}

fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or_default()
}

fn error_message(body: &Value) -> &str {
    body["error"]["message"].as_str().unwrap_or_default()
}

// =============================================================================
// Films
// =============================================================================

#[tokio::test]
async fn test_list_films_empty() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/films", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_film_then_list() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/films", Some(matrix())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, matrix());

    let (status, body) = send(&app, Method::GET, "/films", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([matrix()]));
}

#[tokio::test]
async fn test_create_film_with_empty_name_rejected() {
    let app = app();
    let mut film = matrix();
    film["name"] = json!("");

    let (status, body) = send(&app, Method::POST, "/films", Some(film)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
    assert_eq!(error_message(&body), "Film name must not be empty");

    let (_, body) = send(&app, Method::GET, "/films", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_film_with_long_description_rejected() {
    let app = app();
    let mut film = matrix();
    film["description"] = json!("x".repeat(201));

    let (status, body) = send(&app, Method::POST, "/films", Some(film)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&body),
        "Film description must be at most 200 characters"
    );
}

#[tokio::test]
async fn test_create_film_with_null_description_accepted() {
    let app = app();
    let mut film = matrix();
    film["description"] = Value::Null;

    let (status, body) = send(&app, Method::POST, "/films", Some(film)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["description"], Value::Null);
}

#[tokio::test]
async fn test_update_film_without_id_rejected() {
    let app = app();
    let mut film = matrix();
    film.as_object_mut().unwrap().remove("id");

    let (status, body) = send(&app, Method::PUT, "/films", Some(film)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Film ID must be specified");
}

#[tokio::test]
async fn test_update_unknown_film_not_found() {
    let app = app();
    let mut film = matrix();
    film["id"] = json!(9999);

    let (status, body) = send(&app, Method::PUT, "/films", Some(film)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "NOT_FOUND");
    assert_eq!(error_message(&body), "Film with ID 9999 not found");
}

#[tokio::test]
async fn test_create_film_with_negative_id_accepted() {
    let app = app();
    let mut film = matrix();
    film["id"] = json!(-1);

    let (status, body) = send(&app, Method::POST, "/films", Some(film.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, film);

    let (_, listed) = send(&app, Method::GET, "/films", None).await;
    assert_eq!(listed, json!([film]));
}

#[tokio::test]
async fn test_update_film_with_unknown_negative_id_not_found() {
    let app = app();
    let mut film = matrix();
    film["id"] = json!(-5);

    let (status, body) = send(&app, Method::PUT, "/films", Some(film)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "Film with ID -5 not found");
}

#[tokio::test]
async fn test_update_film_returns_stored_film() {
    let app = app();
    send(&app, Method::POST, "/films", Some(matrix())).await;

    let mut changed = matrix();
    changed["name"] = json!("Matrix Reloaded");

    let (status, body) = send(&app, Method::PUT, "/films", Some(changed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, matrix());
}

#[tokio::test]
async fn test_update_film_with_invalid_duration_rejected() {
    let app = app();
    send(&app, Method::POST, "/films", Some(matrix())).await;

    let mut changed = matrix();
    changed["duration"] = json!(-1);

    let (status, body) = send(&app, Method::PUT, "/films", Some(changed)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Film duration must be a positive number");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/films")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_create_users_assigns_sequential_ids() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/users", Some(bob())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["name"], json!("bob"));

    let (_, body) = send(&app, Method::POST, "/users", Some(bob())).await;
    assert_eq!(body["id"], json!(2));

    let (_, body) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_user_with_bad_login_rejected() {
    let app = app();
    let mut user = bob();
    user["login"] = json!("bob smith");

    let (status, body) = send(&app, Method::POST, "/users", Some(user)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Login must not be empty or contain spaces");
}

#[tokio::test]
async fn test_create_user_with_future_birthday_rejected() {
    let app = app();
    let mut user = bob();
    let future = Local::now().date_naive() + Duration::days(2);
    user["birthday"] = json!(future.to_string());

    let (status, body) = send(&app, Method::POST, "/users", Some(user)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Birthday must not be in the future");
}

#[tokio::test]
async fn test_update_user_returns_original() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/users", Some(bob())).await;

    let mut changed = created.clone();
    changed["email"] = json!("new@b.com");

    let (status, body) = send(&app, Method::PUT, "/users", Some(changed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
    assert_eq!(body["email"], json!("a@b.com"));
}

#[tokio::test]
async fn test_update_user_without_id_rejected() {
    let app = app();
    send(&app, Method::POST, "/users", Some(bob())).await;

    let (status, body) = send(&app, Method::PUT, "/users", Some(bob())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "User ID must be specified");
}

#[tokio::test]
async fn test_update_unknown_user_not_found() {
    let app = app();
    let mut user = bob();
    user["id"] = json!(5);

    let (status, body) = send(&app, Method::PUT, "/users", Some(user)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "User with ID 5 not found");
}

#[tokio::test]
async fn test_update_user_with_unknown_negative_id_not_found() {
    let app = app();
    let mut user = bob();
    user["id"] = json!(-3);

    let (status, body) = send(&app, Method::PUT, "/users", Some(user)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "User with ID -3 not found");
}

// =============================================================================
// Health & docs
// =============================================================================

#[tokio::test]
async fn test_health_reports_store_sizes() {
    let app = app();
    send(&app, Method::POST, "/films", Some(matrix())).await;
    send(&app, Method::POST, "/users", Some(bob())).await;
    send(&app, Method::POST, "/users", Some(bob())).await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["stores"], json!({"films": 1, "users": 2}));
}

#[tokio::test]
async fn test_openapi_document_lists_paths() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/films").is_some());
    assert!(body["paths"].get("/users").is_some());
}

#[tokio::test]
async fn test_openapi_document_carries_schema_examples() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    let film = &body["components"]["schemas"]["Film"]["properties"];
    assert_eq!(film["name"]["example"], json!("Matrix"));
    assert_eq!(film["releaseDate"]["example"], json!("1999-03-31"));
}
