//! Film Service Library
//!
//! In-memory film store with validation on create and update. Embedded by
//! the gateway, which exposes it under `/films`.

pub mod repository;
pub mod service;

use std::sync::Arc;

pub use repository::{FilmRepository, FilmStore};
pub use service::{FilmManager, FilmService};

/// Build a film service backed by a fresh, empty in-memory store.
pub fn in_memory() -> Arc<dyn FilmService> {
    Arc::new(FilmManager::new(Arc::new(FilmStore::new())))
}
