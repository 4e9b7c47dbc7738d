//! Repository layer for film storage.

mod film_repository;

pub use film_repository::{FilmRepository, FilmStore};

#[cfg(any(test, feature = "test-utils"))]
pub use film_repository::MockFilmRepository;
