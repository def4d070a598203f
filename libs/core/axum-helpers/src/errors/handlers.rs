use axum::{
    http::{StatusCode, header},
    response::Response,
};

use super::{ErrorCode, error_response};

/// Handler for 404 Not Found errors.
///
/// Used as the router fallback so unknown paths get the standard envelope.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "The requested resource was not found".to_string(),
        ErrorCode::NotFound,
    )
}

/// Response mapper that gives the timeout layer's bare 408 a JSON body.
pub async fn request_timeout(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT
        && !response.headers().contains_key(header::CONTENT_TYPE)
    {
        return error_response(
            StatusCode::REQUEST_TIMEOUT,
            ErrorCode::RequestTimeout.default_message().to_string(),
            ErrorCode::RequestTimeout,
        );
    }
    response
}
