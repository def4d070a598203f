use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorKind};
use domain_users::UserError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    ExternalService(String),

    #[error("{0}")]
    Internal(String),

    /// A user lookup failure passed through unchanged.
    #[error(transparent)]
    User(#[from] UserError),
}

pub type WeatherResult<T> = Result<T, WeatherError>;

impl WeatherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WeatherError::NotFound(_) => ErrorKind::NotFound,
            WeatherError::Validation(_) => ErrorKind::Validation,
            WeatherError::Unauthorized(_) => ErrorKind::Unauthorized,
            WeatherError::ExternalService(_) => ErrorKind::ExternalService,
            WeatherError::Internal(_) => ErrorKind::Internal,
            WeatherError::User(err) => err.kind(),
        }
    }

    /// Label used for the lookup outcome metric.
    pub(crate) fn outcome(&self) -> &'static str {
        match self.kind() {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Validation => "validation",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::ExternalService => "external_service",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Convert WeatherError to AppError for standardized error responses
impl From<WeatherError> for AppError {
    fn from(err: WeatherError) -> Self {
        AppError::from_kind(err.kind(), err.to_string())
    }
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
