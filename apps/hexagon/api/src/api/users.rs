//! Users API routes

use axum::Router;
use domain_users::{UserService, handlers};

use crate::state::AppState;

/// Create users router
pub fn router(state: &AppState) -> Router {
    let service = UserService::new(state.users.clone());
    handlers::router(service)
}
