//! User management metrics.

use metrics::{counter, gauge};

/// User metrics recorder
pub struct UserMetrics;

impl UserMetrics {
    /// Record the outcome of a user operation (`create`, `get`, `update`, ...).
    pub fn record_operation(operation: &'static str, outcome: &'static str) {
        counter!(
            "user_operations_total",
            "operation" => operation,
            "outcome" => outcome
        )
        .increment(1);
    }

    pub fn record_created() {
        Self::record_operation("create", "success");
        gauge!("users_total").increment(1.0);
    }

    pub fn record_deleted() {
        Self::record_operation("delete", "success");
        gauge!("users_total").decrement(1.0);
    }

    /// Overwrite the stored user gauge, e.g. after a list call.
    pub fn set_total(total: usize) {
        gauge!("users_total").set(total as f64);
    }
}
