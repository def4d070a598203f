//! Weather API routes
//!
//! The weather service resolves users through the same store the users
//! routes write to.

use axum::Router;
use domain_weather::{WeatherService, handlers};

use crate::state::AppState;

/// Create weather router
pub fn router(state: &AppState) -> Router {
    let service = WeatherService::new(state.weather.clone(), state.users.clone());
    handlers::router(service)
}
