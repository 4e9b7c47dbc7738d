//! Repository layer for user storage.

mod user_repository;

pub use user_repository::{next_user_id, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
