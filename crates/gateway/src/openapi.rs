//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{Film, User};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::film_handler::list_films,
        crate::handlers::film_handler::create_film,
        crate::handlers::film_handler::update_film,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::update_user,
    ),
    components(schemas(Film, User)),
    tags(
        (name = "Films", description = "Film registry endpoints"),
        (name = "Users", description = "User registry endpoints"),
    )
)]
pub struct ApiDoc;
