use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

const ID_PREFIX: &str = "user_";

/// Repository trait for User persistence
///
/// The store is the final authority on email uniqueness at creation time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Assign an ID and insert the user. Conflict if the email is taken.
    async fn create(&self, user: User) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: &str) -> UserResult<User>;

    /// Get a user by exact email
    async fn get_by_email(&self, email: &str) -> UserResult<User>;

    /// Replace the stored record with the same ID
    async fn update(&self, user: User) -> UserResult<User>;

    /// Delete a user by ID
    async fn delete(&self, id: &str) -> UserResult<()>;

    /// Page through users in creation order
    async fn list(&self, limit: usize, offset: usize) -> UserResult<Vec<User>>;

    /// Count stored users
    async fn count(&self) -> UserResult<usize>;
}

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<u64, User>,
    last_id: u64,
}

impl Inner {
    fn find(&self, id: &str) -> Option<u64> {
        let seq = parse_id(id)?;
        self.users
            .get(&seq)
            .filter(|user| user.id == id)
            .map(|_| seq)
    }
}

fn parse_id(id: &str) -> Option<u64> {
    id.strip_prefix(ID_PREFIX)?.parse().ok()
}

/// In-memory implementation of UserRepository
///
/// Map and counter live behind one lock, so every operation sees them as a
/// single consistent unit. Clones share the same store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> UserResult<User> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|u| u.email == user.email) {
            return Err(UserError::Conflict(
                "user with email already exists".to_string(),
            ));
        }

        inner.last_id += 1;
        let seq = inner.last_id;
        user.id = format!("{ID_PREFIX}{seq}");
        inner.users.insert(seq, user.clone());

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: &str) -> UserResult<User> {
        let inner = self.inner.read().await;
        inner
            .find(id)
            .and_then(|seq| inner.users.get(&seq).cloned())
            .ok_or_else(UserError::not_found)
    }

    async fn get_by_email(&self, email: &str) -> UserResult<User> {
        let inner = self.inner.read().await;
        inner
            .users
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(UserError::not_found)
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut inner = self.inner.write().await;

        let seq = inner.find(&user.id).ok_or_else(UserError::not_found)?;
        inner.users.insert(seq, user.clone());

        tracing::info!(user_id = %user.id, "Updated user");
        Ok(user)
    }

    async fn delete(&self, id: &str) -> UserResult<()> {
        let mut inner = self.inner.write().await;

        let seq = inner.find(id).ok_or_else(UserError::not_found)?;
        inner.users.remove(&seq);

        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }

    async fn list(&self, limit: usize, offset: usize) -> UserResult<Vec<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self) -> UserResult<usize> {
        Ok(self.inner.read().await.users.len())
    }
}
