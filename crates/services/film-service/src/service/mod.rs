//! Service layer for film use cases.

mod film_service;

pub use film_service::{FilmManager, FilmService};
