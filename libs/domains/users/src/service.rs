//! User Service - Business logic layer

use observability::UserMetrics;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{DEFAULT_LIMIT, UpdateUser, User};
use crate::repository::UserRepository;

/// User service providing business logic operations
///
/// Validates input and checks email uniqueness before touching the
/// repository. The create-time check can go stale under concurrent creates;
/// the repository's own check is the final word.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new UserService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new user
    #[instrument(skip(self, email, name))]
    pub async fn create_user(
        &self,
        email: impl Into<String> + Send,
        name: impl Into<String> + Send,
    ) -> UserResult<User> {
        let user = User::new(email, name)?;

        match self.repository.get_by_email(&user.email).await {
            Ok(_) => {
                UserMetrics::record_operation("create", "conflict");
                return Err(UserError::Conflict(
                    "user with this email already exists".to_string(),
                ));
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        match self.repository.create(user).await {
            Ok(user) => {
                UserMetrics::record_created();
                Ok(user)
            }
            Err(e) => {
                UserMetrics::record_operation("create", e.outcome());
                Err(e)
            }
        }
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> UserResult<User> {
        require_id(id)?;
        self.repository.get_by_id(id).await
    }

    /// Get a user by email
    #[instrument(skip(self))]
    pub async fn get_user_by_email(&self, email: &str) -> UserResult<User> {
        if email.trim().is_empty() {
            return Err(UserError::Validation("email is required".to_string()));
        }
        self.repository.get_by_email(email).await
    }

    /// Update an existing user
    ///
    /// Only supplied, non-empty fields change. Moving to an email owned by a
    /// different user is a conflict.
    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: &str, input: UpdateUser) -> UserResult<User> {
        require_id(id)?;

        let mut user = self.repository.get_by_id(id).await?;
        let (email, name) = input.normalized();

        if let Some(new_email) = email.as_deref().filter(|e| *e != user.email) {
            match self.repository.get_by_email(new_email).await {
                Ok(owner) if owner.id != user.id => {
                    UserMetrics::record_operation("update", "conflict");
                    return Err(UserError::Conflict("email already in use".to_string()));
                }
                Ok(_) => {}
                Err(e) if e.is_not_found() => {}
                Err(e) => return Err(e),
            }
        }

        user.apply(email, name);
        match self.repository.update(user).await {
            Ok(user) => {
                UserMetrics::record_operation("update", "success");
                Ok(user)
            }
            Err(e) => {
                UserMetrics::record_operation("update", e.outcome());
                Err(e)
            }
        }
    }

    /// Delete a user
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> UserResult<()> {
        require_id(id)?;
        self.repository.delete(id).await?;
        UserMetrics::record_deleted();
        Ok(())
    }

    /// List users; `limit <= 0` means the default page size, negative
    /// `offset` means zero.
    #[instrument(skip(self))]
    pub async fn list_users(&self, limit: i64, offset: i64) -> UserResult<Vec<User>> {
        let limit = usize::try_from(limit)
            .ok()
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_LIMIT);
        let offset = usize::try_from(offset).unwrap_or(0);

        self.repository.list(limit, offset).await
    }

    /// Count stored users
    #[instrument(skip(self))]
    pub async fn count_users(&self) -> UserResult<usize> {
        let total = self.repository.count().await?;
        UserMetrics::set_total(total);
        Ok(total)
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

fn require_id(id: &str) -> UserResult<()> {
    if id.trim().is_empty() {
        return Err(UserError::Validation("user ID is required".to_string()));
    }
    Ok(())
}
