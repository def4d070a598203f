//! Handler tests for Weather domain
//!
//! A canned provider stands in for the upstream API so only the routing,
//! query handling and error mapping are exercised.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::ErrorResponse;
use domain_users::{InMemoryUserRepository, User, UserRepository};
use domain_weather::*;
use http_body_util::BodyExt;
use tower::ServiceExt; // For oneshot()

struct CannedProvider;

#[async_trait]
impl WeatherProvider for CannedProvider {
    async fn get_weather(&self, city: &str) -> WeatherResult<Weather> {
        match city {
            "Atlantis" => Err(WeatherError::NotFound("city not found".into())),
            "Offline" => Err(WeatherError::ExternalService(
                "weather API returned status: 502".into(),
            )),
            _ => Ok(Weather {
                city: city.to_string(),
                temperature: 21.0,
                description: "clear sky".into(),
                humidity: 40,
                wind_speed: 2.5,
            }),
        }
    }
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn app() -> (Router, String) {
    let users = InMemoryUserRepository::new();
    let user = users
        .create(User::new("ann@example.com", "Ann").unwrap())
        .await
        .unwrap();

    let service = WeatherService::new(CannedProvider, users);
    (handlers::router(service), user.id)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_get_weather_handler() {
    let (app, _) = app().await;

    let response = app.oneshot(get("/weather?city=Paris")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let weather: Weather = json_body(response.into_body()).await;
    assert_eq!(weather.city, "Paris");
    assert_eq!(weather.humidity, 40);
}

#[tokio::test]
async fn test_get_weather_handler_requires_city() {
    let (app, _) = app().await;

    for uri in ["/weather", "/weather?city="] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

        let body: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(body.message, "city parameter is required");
    }
}

#[tokio::test]
async fn test_get_weather_handler_maps_upstream_errors() {
    let (app, _) = app().await;

    let response = app
        .clone()
        .oneshot(get("/weather?city=Atlantis"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/weather?city=Offline")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(body.message, "External service unavailable");
}

#[tokio::test]
async fn test_user_weather_handler() {
    let (app, user_id) = app().await;

    let response = app
        .oneshot(get(&format!("/users/{user_id}/weather?city=Rome")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let weather: Weather = json_body(response.into_body()).await;
    assert_eq!(weather.city, "Rome");
}

#[tokio::test]
async fn test_user_weather_handler_unknown_user_is_unauthorized() {
    let (app, _) = app().await;

    let response = app
        .oneshot(get("/users/user_999/weather?city=Rome"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(body.error, "UNAUTHORIZED");
    assert_eq!(body.message, "user not found");
}

#[tokio::test]
async fn test_user_weather_handler_requires_city() {
    let (app, user_id) = app().await;

    let response = app
        .oneshot(get(&format!("/users/{user_id}/weather")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
