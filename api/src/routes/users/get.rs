//! User read-only routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use util::state::AppState;

use super::common::UserResponse;
use crate::response::ApiResponse;
use db::models::{
    user::{Column as UserCol, Entity as UserEntity},
    user_subject::{Column as EnrollmentCol, Entity as EnrollmentEntity, Model as Enrollment},
};

/// GET `/users`
///
/// List every user with their subject enrollments.
pub async fn list_users(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<Vec<UserResponse>>>) {
    let db = state.db();

    let users = match UserEntity::find().order_by_asc(UserCol::Id).all(db).await {
        Ok(users) => users,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to retrieve users")),
            );
        }
    };

    let enrollments = match EnrollmentEntity::find().all(db).await {
        Ok(rows) => rows,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to retrieve users")),
            );
        }
    };

    let mut grouped: HashMap<String, Vec<Enrollment>> = HashMap::new();
    for row in enrollments {
        grouped.entry(row.user_id.clone()).or_default().push(row);
    }

    let payload: Vec<UserResponse> = users
        .into_iter()
        .map(|u| {
            let subjects = grouped.remove(&u.id).unwrap_or_default();
            UserResponse::from_user(u, subjects)
        })
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(payload, "Users retrieved")),
    )
}

/// GET `/user/{email}`
///
/// Fetch a single user by email.
///
/// ### Responses
/// - `200 OK` → `UserResponse`
/// - `404 Not Found` if no user has that email
pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> (StatusCode, Json<ApiResponse<Option<UserResponse>>>) {
    let db = state.db();

    let user = match UserEntity::find()
        .filter(UserCol::Email.eq(&email))
        .one(db)
        .await
    {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("User not found")),
            );
        }
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to retrieve user")),
            );
        }
    };

    match EnrollmentEntity::find()
        .filter(EnrollmentCol::UserId.eq(&user.id))
        .all(db)
        .await
    {
        Ok(enrollments) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(UserResponse::from_user(user, enrollments)),
                "User retrieved",
            )),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to retrieve user")),
        ),
    }
}
