//! HTTP route entry point.
//!
//! Route groups are organized by domain:
//! - `/health` → liveness probe
//! - `/check`, `/checkname` → attendance sessions and check-ins
//! - `/user`, `/users` → user management and enrollments
//! - `/subject`, `/subjects` → subject management
//!
//! The legacy deployment exposed these paths at the server root, so no
//! `/api` prefix is added here.

use axum::Router;
use util::state::AppState;

pub mod checks;
pub mod health;
pub mod subjects;
pub mod users;

/// Builds the complete application router for all HTTP endpoints.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .merge(health::health_routes())
        .merge(checks::check_routes())
        .merge(users::user_routes())
        .merge(subjects::subject_routes())
        .with_state(app_state)
}
