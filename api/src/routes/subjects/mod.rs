//! # Subject Routes Module
//!
//! Wires up subject management:
//! - `GET /subjects` → list subjects
//! - `POST /subject` → create subject
//! - `GET /subject/{id}` → fetch by id
//! - `PUT /subject/{id}` → update
//! - `DELETE /subject/{id}` → delete

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

use delete::delete_subject;
use get::{get_subject, list_subjects};
use post::create_subject;
use put::update_subject;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

pub fn subject_routes() -> Router<AppState> {
    Router::new()
        .route("/subjects", get(list_subjects))
        .route("/subject", post(create_subject))
        .route(
            "/subject/{id}",
            get(get_subject).put(update_subject).delete(delete_subject),
        )
}
