//! User Service Library
//!
//! In-memory user store that validates users and assigns their identifiers.
//! Embedded by the gateway, which exposes it under `/users`.

pub mod repository;
pub mod service;

use std::sync::Arc;

pub use repository::{UserRepository, UserStore};
pub use service::{UserManager, UserService};

/// Build a user service backed by a fresh, empty in-memory store.
pub fn in_memory() -> Arc<dyn UserService> {
    Arc::new(UserManager::new(Arc::new(UserStore::new())))
}
