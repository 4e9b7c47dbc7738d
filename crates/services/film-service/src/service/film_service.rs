//! Film service - Handles film-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use domain::{DomainError, DomainResult, Film, MSG_FILM_ID_REQUIRED};

use crate::repository::FilmRepository;

/// Film service trait for dependency injection.
#[async_trait]
pub trait FilmService: Send + Sync {
    /// List all films in insertion order
    async fn list_films(&self) -> Vec<Film>;

    /// Validate and store a film.
    ///
    /// The caller owns the identifier: it is neither generated nor checked
    /// for uniqueness.
    async fn create_film(&self, film: Film) -> DomainResult<Film>;

    /// Look up a film by the incoming ID and validate the incoming film.
    ///
    /// Returns the stored film unchanged; the incoming field values are not
    /// written back.
    async fn update_film(&self, film: Film) -> DomainResult<Film>;
}

/// Concrete implementation of FilmService using repository.
pub struct FilmManager {
    repo: Arc<dyn FilmRepository>,
}

impl FilmManager {
    /// Create new film service instance with repository
    pub fn new(repo: Arc<dyn FilmRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl FilmService for FilmManager {
    async fn list_films(&self) -> Vec<Film> {
        self.repo.list().await
    }

    async fn create_film(&self, film: Film) -> DomainResult<Film> {
        film.ensure_valid()?;
        Ok(self.repo.insert(film).await)
    }

    async fn update_film(&self, film: Film) -> DomainResult<Film> {
        if !film.has_id() {
            return Err(DomainError::validation(MSG_FILM_ID_REQUIRED));
        }

        let existing = self
            .repo
            .find_by_id(film.id)
            .await
            .ok_or_else(|| DomainError::not_found(format!("Film with ID {} not found", film.id)))?;

        film.ensure_valid()?;
        Ok(existing)
    }
}
