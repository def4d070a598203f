//! Weather Domain
//!
//! Pass-through lookups against an external current-weather API.
//!
//! - [`provider::WeatherProvider`]: the port the service depends on
//! - [`client::OpenWeatherClient`]: `reqwest` adapter for OpenWeatherMap
//! - [`service::WeatherService`]: validation and the user-scoped policy
//!   (unknown users are Unauthorized)
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::weather::WeatherApiConfig;
//! use domain_users::InMemoryUserRepository;
//! use domain_weather::{OpenWeatherClient, WeatherService, handlers};
//!
//! let client = OpenWeatherClient::new(&WeatherApiConfig::new(
//!     "https://api.openweathermap.org/data/2.5",
//!     "demo-key",
//! ))?;
//! let service = WeatherService::new(client, InMemoryUserRepository::new());
//! let router = handlers::router(service);
//! # Ok::<(), domain_weather::WeatherError>(())
//! ```

pub mod client;
pub mod error;
pub mod handlers;
pub mod models;
pub mod provider;
pub mod service;

pub use client::OpenWeatherClient;
pub use error::{WeatherError, WeatherResult};
pub use models::{Weather, WeatherQuery};
pub use provider::WeatherProvider;
pub use service::WeatherService;
