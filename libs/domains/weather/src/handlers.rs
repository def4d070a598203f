use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use axum_helpers::errors::responses::{
    BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    ServiceUnavailableResponse, UnauthorizedResponse,
};
use domain_users::UserRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::WeatherResult;
use crate::models::{Weather, WeatherQuery};
use crate::provider::WeatherProvider;
use crate::service::WeatherService;

/// OpenAPI documentation for Weather API
#[derive(OpenApi)]
#[openapi(
    paths(get_weather, get_user_weather),
    components(
        schemas(Weather),
        responses(
            BadRequestValidationResponse,
            NotFoundResponse,
            UnauthorizedResponse,
            ServiceUnavailableResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Weather", description = "Current weather lookups")
    )
)]
pub struct ApiDoc;

/// Create the weather router
///
/// Routes are absolute (`/weather`, `/users/{id}/weather`) so the router is
/// merged next to the users router rather than nested.
pub fn router<P, R>(service: WeatherService<P, R>) -> Router
where
    P: WeatherProvider + 'static,
    R: UserRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/weather", get(get_weather))
        .route("/users/{id}/weather", get(get_user_weather))
        .with_state(shared_service)
}

/// Current weather for a city
#[utoipa::path(
    get,
    path = "/weather",
    tag = "Weather",
    params(WeatherQuery),
    responses(
        (status = 200, description = "Weather snapshot", body = Weather),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_weather<P: WeatherProvider, R: UserRepository>(
    State(service): State<Arc<WeatherService<P, R>>>,
    Query(query): Query<WeatherQuery>,
) -> WeatherResult<Json<Weather>> {
    let weather = service.get_weather(query.city()?).await?;
    Ok(Json(weather))
}

/// Current weather for a city on behalf of a user
#[utoipa::path(
    get,
    path = "/users/{id}/weather",
    tag = "Weather",
    params(
        ("id" = String, Path, description = "User ID", example = "user_1"),
        WeatherQuery
    ),
    responses(
        (status = 200, description = "Weather snapshot", body = Weather),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user_weather<P: WeatherProvider, R: UserRepository>(
    State(service): State<Arc<WeatherService<P, R>>>,
    Path(id): Path<String>,
    Query(query): Query<WeatherQuery>,
) -> WeatherResult<Json<Weather>> {
    let weather = service.get_weather_for_user(&id, query.city()?).await?;
    Ok(Json(weather))
}
