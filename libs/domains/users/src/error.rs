use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub fn not_found() -> Self {
        UserError::NotFound("user not found".to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::NotFound(_) => ErrorKind::NotFound,
            UserError::Validation(_) => ErrorKind::Validation,
            UserError::Conflict(_) => ErrorKind::Conflict,
            UserError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, UserError::NotFound(_))
    }

    /// Label recorded in `user_operations_total` when an operation fails.
    pub(crate) fn outcome(&self) -> &'static str {
        match self {
            UserError::NotFound(_) => "not_found",
            UserError::Validation(_) => "validation",
            UserError::Conflict(_) => "conflict",
            UserError::Internal(_) => "internal",
        }
    }
}

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        AppError::from_kind(err.kind(), err.to_string())
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_kind_drives_status() {
        let cases = [
            (UserError::not_found(), StatusCode::NOT_FOUND),
            (
                UserError::Validation("email is required".into()),
                StatusCode::BAD_REQUEST,
            ),
            (UserError::Conflict("taken".into()), StatusCode::CONFLICT),
            (
                UserError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.kind().status_code(), status);
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(UserError::Conflict("taken".into()).outcome(), "conflict");
        assert_eq!(UserError::not_found().outcome(), "not_found");
        assert_eq!(UserError::Validation("bad".into()).outcome(), "validation");
        assert_eq!(UserError::Internal("boom".into()).outcome(), "internal");
    }

    #[test]
    fn test_message_is_preserved() {
        let app: AppError = UserError::Conflict("email already in use".into()).into();
        assert!(matches!(app, AppError::Conflict(msg) if msg == "email already in use"));
    }
}
