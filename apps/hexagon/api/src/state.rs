//! Application state management.
//!
//! The state is built once at startup and handed to the route builders. It
//! owns the adapters the domains are wired with:
//! - Configuration
//! - The in-memory user store (clones share one store)
//! - The weather API client

use domain_users::InMemoryUserRepository;
use domain_weather::OpenWeatherClient;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// Authoritative user store shared by the users and weather domains
    pub users: InMemoryUserRepository,
    /// Upstream weather adapter
    pub weather: OpenWeatherClient,
}

impl AppState {
    pub fn new(config: Config) -> eyre::Result<Self> {
        let weather = OpenWeatherClient::new(&config.weather)?;

        Ok(Self {
            config,
            users: InMemoryUserRepository::new(),
            weather,
        })
    }
}
