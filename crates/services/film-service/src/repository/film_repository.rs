//! In-memory film repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use domain::Film;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Film repository trait for dependency injection.
///
/// Films are kept in insertion order and are never removed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// Find the first stored film with the given ID
    async fn find_by_id(&self, id: i64) -> Option<Film>;

    /// Append a film as-is
    async fn insert(&self, film: Film) -> Film;

    /// List all films in insertion order
    async fn list(&self) -> Vec<Film>;
}

/// Film repository backed by a vector behind a single lock.
#[derive(Default)]
pub struct FilmStore {
    films: RwLock<Vec<Film>>,
}

impl FilmStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FilmRepository for FilmStore {
    async fn find_by_id(&self, id: i64) -> Option<Film> {
        self.films
            .read()
            .await
            .iter()
            .find(|film| film.id == id)
            .cloned()
    }

    async fn insert(&self, film: Film) -> Film {
        self.films.write().await.push(film.clone());
        film
    }

    async fn list(&self) -> Vec<Film> {
        self.films.read().await.clone()
    }
}
