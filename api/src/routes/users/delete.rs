//! User delete routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use util::state::AppState;

use crate::response::ApiResponse;
use db::models::{
    user::{Column as UserCol, Entity as UserEntity},
    user_subject::{Column as EnrollmentCol, Entity as EnrollmentEntity},
};

/// DELETE `/user/{email}`
///
/// Delete the user with the given email. Enrollments cascade.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` if no user matched
/// - `500 Internal Server Error` on store failure
pub async fn delete_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    let db = state.db();

    let res = UserEntity::delete_many()
        .filter(UserCol::Email.eq(&email))
        .exec(db)
        .await;

    match res {
        Ok(dr) if dr.rows_affected > 0 => (
            StatusCode::OK,
            Json(ApiResponse::success((), "User deleted successfully")),
        ),
        Ok(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("User not found")),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to delete user")),
        ),
    }
}

/// DELETE `/user/{email}/subject/{subject_id}`
///
/// Remove the user's enrollment rows for a subject. Removing a subject the
/// user is not enrolled in is a success no-op.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` if no user has that email
/// - `500 Internal Server Error` on store failure
pub async fn remove_subject_from_user(
    State(state): State<AppState>,
    Path((email, subject_id)): Path<(String, String)>,
) -> (StatusCode, Json<ApiResponse<()>>) {
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
                Json(ApiResponse::error("Failed to remove subject from user")),
            );
        }
    };

    let res = EnrollmentEntity::delete_many()
        .filter(EnrollmentCol::UserId.eq(&user.id))
        .filter(EnrollmentCol::SubjectId.eq(&subject_id))
        .exec(db)
        .await;

    match res {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Subject removed from user successfully")),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to remove subject from user")),
        ),
    }
}
