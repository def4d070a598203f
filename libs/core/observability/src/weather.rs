//! Weather lookup metrics.

use metrics::{counter, histogram};
use std::time::Duration;

/// Weather metrics recorder
pub struct WeatherMetrics;

impl WeatherMetrics {
    /// Record a finished upstream lookup.
    ///
    /// `outcome` is `success` or the lowercased error kind.
    pub fn record_lookup(outcome: &'static str, elapsed: Duration) {
        counter!("weather_lookups_total", "outcome" => outcome).increment(1);
        histogram!("weather_lookup_duration_seconds", "outcome" => outcome)
            .record(elapsed.as_secs_f64());

        tracing::debug!(
            outcome = outcome,
            duration_ms = elapsed.as_millis() as u64,
            "Weather lookup finished"
        );
    }
}
