//! Observability utilities for the hexagon service.
//!
//! This crate provides:
//! - Prometheus metrics recording and export
//! - Domain metrics for user management and weather lookups
//! - Axum middleware for automatic request metrics
//!
//! # Example
//!
//! ```rust,ignore
//! use observability::{init_metrics, metrics_handler, UserMetrics};
//!
//! init_metrics()?;
//!
//! UserMetrics::record_created();
//!
//! let app = Router::new()
//!     .route("/metrics", get(metrics_handler));
//! ```

pub mod middleware;
pub mod users;
pub mod weather;

pub use middleware::metrics_middleware;
pub use users::UserMetrics;
pub use weather::WeatherMetrics;

pub use metrics_exporter_prometheus::BuildError;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Initialize the Prometheus metrics recorder.
///
/// Safe to call more than once; later calls return the existing handle.
pub fn init_metrics() -> Result<&'static PrometheusHandle, BuildError> {
    METRICS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;

        info!("Prometheus metrics recorder initialized");
        register_metric_descriptions();

        Ok(handle)
    })
}

/// Get the metrics handle (must call init_metrics first)
pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for /metrics endpoint
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

fn register_metric_descriptions() {
    use metrics::{describe_counter, describe_gauge, describe_histogram};

    // HTTP metrics
    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP request errors"
    );

    // User metrics
    describe_counter!(
        "user_operations_total",
        "User operations by type and outcome"
    );
    describe_gauge!("users_total", "Number of users currently stored");

    // Weather metrics
    describe_counter!(
        "weather_lookups_total",
        "Weather lookups by outcome"
    );
    describe_histogram!(
        "weather_lookup_duration_seconds",
        "Upstream weather lookup duration in seconds"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_metrics_handler_renders_after_init() {
        let first = init_metrics().unwrap() as *const PrometheusHandle;
        let second = init_metrics().unwrap() as *const PrometheusHandle;
        assert_eq!(first, second);

        UserMetrics::record_operation("create", "success");
        let body = metrics_handler().await;
        assert!(body.contains("user_operations_total"));
    }
}
