//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use domain::{DomainError, DomainResult, User, MSG_USER_ID_REQUIRED};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users in insertion order
    async fn list_users(&self) -> Vec<User>;

    /// Validate a user, default a blank name to the login, assign an ID
    /// and store it.
    async fn create_user(&self, user: User) -> DomainResult<User>;

    /// Look up a user by the incoming ID.
    ///
    /// Returns the stored user unchanged. The incoming user is neither
    /// validated nor written back.
    async fn update_user(&self, user: User) -> DomainResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> Vec<User> {
        self.repo.list().await
    }

    async fn create_user(&self, mut user: User) -> DomainResult<User> {
        user.ensure_valid()?;
        Ok(self.repo.create(user).await)
    }

    async fn update_user(&self, user: User) -> DomainResult<User> {
        if !user.has_id() {
            return Err(DomainError::validation(MSG_USER_ID_REQUIRED));
        }

        self.repo
            .find_by_id(user.id)
            .await
            .ok_or_else(|| DomainError::not_found(format!("User with ID {} not found", user.id)))
    }
}
