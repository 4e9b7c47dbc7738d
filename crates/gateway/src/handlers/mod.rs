//! HTTP request handlers.

pub mod film_handler;
pub mod health_handler;
pub mod user_handler;

pub use film_handler::film_routes;
pub use health_handler::health_routes;
pub use user_handler::user_routes;
