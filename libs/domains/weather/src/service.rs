//! Weather Service - Business logic layer

use domain_users::UserRepository;
use observability::WeatherMetrics;
use std::sync::Arc;
use std::time::Instant;
use tracing::instrument;

use crate::error::{WeatherError, WeatherResult};
use crate::models::Weather;
use crate::provider::WeatherProvider;

/// Weather lookups, plain or on behalf of a stored user
pub struct WeatherService<P: WeatherProvider, R: UserRepository> {
    provider: Arc<P>,
    users: Arc<R>,
}

impl<P: WeatherProvider, R: UserRepository> WeatherService<P, R> {
    pub fn new(provider: P, users: R) -> Self {
        Self {
            provider: Arc::new(provider),
            users: Arc::new(users),
        }
    }

    /// Current weather for a city
    #[instrument(skip(self))]
    pub async fn get_weather(&self, city: &str) -> WeatherResult<Weather> {
        require_city(city)?;
        self.lookup(city).await
    }

    /// Current weather for a city, requested by a known user
    ///
    /// Unknown users are reported as Unauthorized rather than NotFound. The
    /// user lookup finishes before any upstream call is made.
    #[instrument(skip(self))]
    pub async fn get_weather_for_user(&self, user_id: &str, city: &str) -> WeatherResult<Weather> {
        if user_id.trim().is_empty() {
            return Err(WeatherError::Validation("user ID is required".to_string()));
        }
        require_city(city)?;

        match self.users.get_by_id(user_id).await {
            Ok(_) => {}
            Err(e) if e.is_not_found() => {
                return Err(WeatherError::Unauthorized("user not found".to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        self.lookup(city).await
    }

    async fn lookup(&self, city: &str) -> WeatherResult<Weather> {
        let started = Instant::now();
        let result = self.provider.get_weather(city).await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.outcome(),
        };
        WeatherMetrics::record_lookup(outcome, started.elapsed());

        result
    }
}

impl<P: WeatherProvider, R: UserRepository> Clone for WeatherService<P, R> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            users: Arc::clone(&self.users),
        }
    }
}

fn require_city(city: &str) -> WeatherResult<()> {
    if city.trim().is_empty() {
        return Err(WeatherError::Validation("city is required".to_string()));
    }
    Ok(())
}
