//! User write routes: creation and enrollment.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use util::state::AppState;

use super::common::{CreateUserReq, EnrollmentPayload, UserResponse};
use crate::response::ApiResponse;
use db::models::{
    user,
    user::{Column as UserCol, Entity as UserEntity},
    user_subject,
};

/// POST `/user`
///
/// Create a user, optionally with initial subject enrollments.
///
/// ### Responses
/// - `201 Created` → `UserResponse`
/// - `400 Bad Request` on a malformed body
/// - `500 Internal Server Error` on store failure
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserReq>,
) -> (StatusCode, Json<ApiResponse<Option<UserResponse>>>) {
    let db = state.db();
    let now = Utc::now();

    let created = user::ActiveModel {
        id: Set(body.id),
        name: Set(body.name),
        email: Set(body.email),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await;

    let created = match created {
        Ok(row) => row,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Failed to create user: {e}"))),
            );
        }
    };

    let mut enrollments = Vec::with_capacity(body.subjects.len());
    for subject in body.subjects {
        let row = user_subject::ActiveModel {
            user_id: Set(created.id.clone()),
            subject_id: Set(subject.id),
            section: Set(subject.section),
            kind: Set(subject.kind),
            image: Set(subject.image),
            ..Default::default()
        }
        .insert(db)
        .await;

        match row {
            Ok(row) => enrollments.push(row),
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::error(format!("Failed to create user: {e}"))),
                );
            }
        }
    }

    (
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(UserResponse::from_user(created, enrollments)),
            "User added successfully",
        )),
    )
}

/// POST `/user/{email}/subject`
///
/// Attach a subject enrollment to the user with the given email.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` if no user has that email
/// - `500 Internal Server Error` on store failure
pub async fn add_subject_to_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(body): Json<EnrollmentPayload>,
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
                Json(ApiResponse::error("Failed to add subject to user")),
            );
        }
    };

    let inserted = user_subject::ActiveModel {
        user_id: Set(user.id),
        subject_id: Set(body.id),
        section: Set(body.section),
        kind: Set(body.kind),
        image: Set(body.image),
        ..Default::default()
    }
    .insert(db)
    .await;

    match inserted {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Subject added to user successfully")),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to add subject to user")),
        ),
    }
}
