//! # Check Session Routes Module
//!
//! Wires up the attendance surface:
//! - `GET /check/{sid}` → session for a subject
//! - `POST /check` → create a session
//! - `DELETE /check/{name}` → delete a session by name
//! - `PUT /check/{name}/status` → open/close a session
//! - `POST /check/{name}/std` → student check-in
//! - `GET /checkname/{name}/check` → ordered check sequence
//! - `DELETE /checkname/{name}/check/{student_id}` → pull a student's checks

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use util::state::AppState;

use delete::{delete_session, remove_student_checks};
use get::{get_session_for_subject, list_session_checks};
use post::{check_in, create_session};
use put::update_session_status;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/check` and `/checkname` route groups.
///
/// `GET /check/{sid}` and `DELETE /check/{name}` share a path shape; the
/// GET resolves by subject id, the DELETE by session name, matching the
/// legacy surface.
pub fn check_routes() -> Router<AppState> {
    Router::new()
        .route("/check", post(create_session))
        .route("/check/{name}", get(get_session_for_subject).delete(delete_session))
        .route("/check/{name}/status", put(update_session_status))
        .route("/check/{name}/std", post(check_in))
        .route("/checkname/{name}/check", get(list_session_checks))
        .route(
            "/checkname/{name}/check/{student_id}",
            delete(remove_student_checks),
        )
}
