//! OpenWeatherMap client
//!
//! Adapter for the `WeatherProvider` port backed by the OpenWeatherMap
//! current-weather endpoint (or anything speaking the same JSON).

use async_trait::async_trait;
use core_config::weather::WeatherApiConfig;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{WeatherError, WeatherResult};
use crate::models::Weather;
use crate::provider::WeatherProvider;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    name: String,
    main: ApiMain,
    #[serde(default)]
    weather: Vec<ApiCondition>,
    wind: ApiWind,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct ApiWind {
    speed: f64,
}

impl From<ApiResponse> for Weather {
    fn from(resp: ApiResponse) -> Self {
        Self {
            city: resp.name,
            temperature: resp.main.temp,
            description: resp
                .weather
                .into_iter()
                .next()
                .map(|c| c.description)
                .unwrap_or_default(),
            humidity: resp.main.humidity,
            wind_speed: resp.wind.speed,
        }
    }
}

/// HTTP client for the current-weather API
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(config: &WeatherApiConfig) -> WeatherResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| WeatherError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn get_weather(&self, city: &str) -> WeatherResult<Weather> {
        let url = format!("{}/weather", self.base_url);
        debug!(city = city, "Fetching weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!("Weather API request failed: {}", e);
                WeatherError::ExternalService(format!("failed to fetch weather: {}", e))
            })?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                return Err(WeatherError::NotFound("city not found".to_string()));
            }
            status => {
                warn!("Weather API returned {} for {}", status, city);
                return Err(WeatherError::ExternalService(format!(
                    "weather API returned status: {}",
                    status.as_u16()
                )));
            }
        }

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Internal(format!("failed to decode response: {}", e)))?;

        Ok(body.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::matchers::{contains, request, url_decoded};
    use httptest::responders::{json_encoded, status_code};
    use httptest::{Expectation, Server};
    use serde_json::json;
    use std::time::Duration;

    fn client_for(server: &Server) -> OpenWeatherClient {
        let config = WeatherApiConfig::new(server.url_str("/"), "test-key");
        OpenWeatherClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_get_weather_maps_payload() {
        let server = Server::run();
        server.expect(
            Expectation::matching(httptest::all_of![
                request::method_path("GET", "/weather"),
                request::query(url_decoded(contains(("q", "London")))),
                request::query(url_decoded(contains(("appid", "test-key")))),
                request::query(url_decoded(contains(("units", "metric")))),
            ])
            .respond_with(json_encoded(json!({
                "name": "London",
                "main": {"temp": 12.5, "humidity": 81},
                "weather": [{"description": "light rain"}, {"description": "mist"}],
                "wind": {"speed": 4.1}
            }))),
        );

        let weather = client_for(&server).get_weather("London").await.unwrap();

        assert_eq!(
            weather,
            Weather {
                city: "London".into(),
                temperature: 12.5,
                description: "light rain".into(),
                humidity: 81,
                wind_speed: 4.1,
            }
        );
    }

    #[tokio::test]
    async fn test_empty_conditions_give_empty_description() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/weather")).respond_with(
                json_encoded(json!({
                    "name": "Oslo",
                    "main": {"temp": -3.0, "humidity": 60},
                    "weather": [],
                    "wind": {"speed": 1.0}
                })),
            ),
        );

        let weather = client_for(&server).get_weather("Oslo").await.unwrap();
        assert_eq!(weather.description, "");
    }

    #[tokio::test]
    async fn test_unknown_city_is_not_found() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/weather"))
                .respond_with(status_code(404)),
        );

        let err = client_for(&server).get_weather("Atlantis").await.unwrap_err();
        assert_eq!(err, WeatherError::NotFound("city not found".into()));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_external_service() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/weather"))
                .respond_with(status_code(401)),
        );

        let err = client_for(&server).get_weather("London").await.unwrap_err();
        assert_eq!(
            err,
            WeatherError::ExternalService("weather API returned status: 401".into())
        );
    }

    #[tokio::test]
    async fn test_garbage_body_is_internal() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/weather"))
                .respond_with(status_code(200).body("not json")),
        );

        let err = client_for(&server).get_weather("London").await.unwrap_err();
        assert!(matches!(err, WeatherError::Internal(_)));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_external_service() {
        let mut config = WeatherApiConfig::new("http://127.0.0.1:1", "test-key");
        config.timeout = Duration::from_secs(2);
        let client = OpenWeatherClient::new(&config).unwrap();

        let err = client.get_weather("London").await.unwrap_err();
        assert!(matches!(err, WeatherError::ExternalService(_)));
    }
}
