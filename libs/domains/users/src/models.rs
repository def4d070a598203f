use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{UserError, UserResult};

pub const DEFAULT_LIMIT: usize = 10;

/// User entity
///
/// The `id` is assigned by the store on creation and is empty until then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier (`user_<n>`)
    pub id: String,
    /// User email (unique)
    pub email: String,
    /// User display name
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a not-yet-stored user. Blank email or name is rejected.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> UserResult<Self> {
        let email = email.into();
        let name = name.into();

        if email.trim().is_empty() {
            return Err(UserError::Validation("email is required".to_string()));
        }
        if name.trim().is_empty() {
            return Err(UserError::Validation("name is required".to_string()));
        }

        let now = Utc::now();
        Ok(Self {
            id: String::new(),
            email,
            name,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply the supplied non-empty fields and refresh `updated_at`.
    pub fn apply(&mut self, email: Option<String>, name: Option<String>) {
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(name) = name {
            self.name = name;
        }
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

/// DTO for creating a new user
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

/// DTO for updating a user; absent and empty fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub name: Option<String>,
}

impl UpdateUser {
    /// Drop blank values so only real changes remain.
    pub fn normalized(self) -> (Option<String>, Option<String>) {
        let keep = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        (keep(self.email), keep(self.name))
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// User response with RFC 3339 timestamps
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    #[schema(example = "2024-01-01T12:00:00Z")]
    pub created_at: String,
    #[schema(example = "2024-01-01T12:00:00Z")]
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            updated_at: user.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Pagination query for listing users
///
/// Values that do not parse, a non-positive limit or a negative offset fall
/// back to the defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Maximum number of users to return (default 10)
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
    /// Number of users to skip (default 0)
    #[param(value_type = Option<i64>)]
    pub offset: Option<String>,
}

impl ListUsersQuery {
    pub fn limit(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_LIMIT as i64)
    }

    pub fn offset(&self) -> i64 {
        self.offset
            .as_deref()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|o| *o >= 0)
            .unwrap_or(0)
    }
}
