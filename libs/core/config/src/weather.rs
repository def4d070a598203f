use crate::{ConfigError, FromEnv, env_or_default};
use std::time::Duration;

pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEMO_API_KEY: &str = "demo-key";

/// Upstream weather API configuration
#[derive(Clone, Debug)]
pub struct WeatherApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl WeatherApiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Whether the placeholder key is in use
    pub fn is_demo_key(&self) -> bool {
        self.api_key == DEMO_API_KEY
    }
}

impl FromEnv for WeatherApiConfig {
    /// - WEATHER_API_URL: defaults to the public OpenWeatherMap endpoint
    /// - WEATHER_API_KEY: defaults to a demo key (a warning is logged)
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_or_default("WEATHER_API_URL", DEFAULT_WEATHER_API_URL);
        let api_key = match std::env::var("WEATHER_API_KEY") {
            Ok(key) if !key.trim().is_empty() => key,
            _ => {
                tracing::warn!("WEATHER_API_KEY not set, using demo key");
                DEMO_API_KEY.to_string()
            }
        };

        Ok(Self::new(base_url.trim_end_matches('/'), api_key))
    }
}
