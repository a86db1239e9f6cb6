//! # User Routes Module
//!
//! Wires up user management and subject enrollment:
//! - `GET /users` → list users with enrollments
//! - `POST /user` → create user
//! - `GET /user/{email}` → fetch by email
//! - `PUT /user/{email}` → update (legacy surface passes the user id here)
//! - `DELETE /user/{email}` → delete by email
//! - `POST /user/{email}/subject` → add an enrollment
//! - `DELETE /user/{email}/subject/{subject_id}` → remove an enrollment

use axum::{
    Router,
    routing::{delete, get, post},
};
use util::state::AppState;

use delete::{delete_user, remove_subject_from_user};
use get::{get_user, list_users};
use post::{add_subject_to_user, create_user};
use put::update_user;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/user", post(create_user))
        .route(
            "/user/{email}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/user/{email}/subject", post(add_subject_to_user))
        .route(
            "/user/{email}/subject/{subject_id}",
            delete(remove_subject_from_user),
        )
}
