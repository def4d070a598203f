use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{WeatherError, WeatherResult};

/// Current weather snapshot for a city. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Weather {
    #[schema(example = "London")]
    pub city: String,
    /// Degrees Celsius
    pub temperature: f64,
    #[schema(example = "light rain")]
    pub description: String,
    /// Relative humidity in percent
    pub humidity: i32,
    /// Metres per second
    pub wind_speed: f64,
}

/// Query string for weather lookups
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeatherQuery {
    /// City name, e.g. `London`
    pub city: Option<String>,
}

impl WeatherQuery {
    pub fn city(&self) -> WeatherResult<&str> {
        self.city
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| WeatherError::Validation("city parameter is required".to_string()))
    }
}
