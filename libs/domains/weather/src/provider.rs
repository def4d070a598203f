use async_trait::async_trait;

use crate::error::WeatherResult;
use crate::models::Weather;

/// Port for fetching current weather by city name
///
/// Implementations classify failures as NotFound (unknown city),
/// ExternalService (upstream unreachable or non-success status) or
/// Internal (malformed response).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn get_weather(&self, city: &str) -> WeatherResult<Weather>;
}
