//! In-memory user repository with store-assigned identifiers.

use async_trait::async_trait;
use tokio::sync::RwLock;

use domain::{User, FIRST_USER_ID};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Next identifier for a store holding `users`: one past the highest, or 1.
pub fn next_user_id(users: &[User]) -> i64 {
    users
        .iter()
        .map(|user| user.id)
        .max()
        .map_or(FIRST_USER_ID, |max| max + 1)
}

/// User repository trait for dependency injection.
///
/// Users are kept in insertion order and are never removed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the first stored user with the given ID
    async fn find_by_id(&self, id: i64) -> Option<User>;

    /// Assign the next free ID to the user and append it
    async fn create(&self, user: User) -> User;

    /// List all users in insertion order
    async fn list(&self) -> Vec<User>;
}

/// User repository backed by a vector behind a single lock.
#[derive(Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i64) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.id == id)
            .cloned()
    }

    async fn create(&self, mut user: User) -> User {
        // ID assignment and append share one write guard
        let mut users = self.users.write().await;
        user.id = next_user_id(&users);
        users.push(user.clone());
        user
    }

    async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}
