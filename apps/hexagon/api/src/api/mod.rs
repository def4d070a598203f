//! API routes module

pub mod users;
pub mod weather;

use axum::{Router, middleware, routing::get};
use axum_helpers::server::{create_router, health_router};
use observability::{metrics_handler, metrics_middleware};
use std::io;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/users", users::router(state))
        .merge(weather::router(state))
}

/// Full application: API, docs, health and metrics
pub fn app(state: &AppState) -> io::Result<Router> {
    let router = create_router::<ApiDoc>(routes(state), &state.config.server)?;

    Ok(router
        .merge(health_router(state.config.app))
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn(metrics_middleware)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig, weather::WeatherApiConfig};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = Config {
            app: app_info!(),
            server: ServerConfig::default(),
            weather: WeatherApiConfig::new("http://127.0.0.1:1", "test-key"),
            environment: Environment::Development,
        };
        let state = AppState::new(config).unwrap();
        app(&state).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app();

        let (status, body) = send(&app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "hexagon_api");
    }

    #[tokio::test]
    async fn test_user_lifecycle_through_full_router() {
        let app = test_app();

        let create = Request::builder()
            .method("POST")
            .uri("/api/users")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({"email": "ann@example.com", "name": "Ann"}).to_string(),
            ))
            .unwrap();
        let (status, created) = send(&app, create).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], "user_1");

        let (status, fetched) = send(&app, get("/api/users/user_1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, list) = send(&app, get("/api/users")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_weather_for_unknown_user_is_unauthorized() {
        let app = test_app();

        let (status, body) = send(&app, get("/api/users/user_7/weather?city=Rome")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "user not found");
    }

    #[tokio::test]
    async fn test_unreachable_weather_api_is_503() {
        let app = test_app();

        let (status, body) = send(&app, get("/api/weather?city=Rome")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "SERVICE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_unknown_route_uses_error_envelope() {
        let app = test_app();

        let (status, body) = send(&app, get("/api/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_metrics_endpoint_answers() {
        let app = test_app();

        let response = app.oneshot(get("/metrics")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
