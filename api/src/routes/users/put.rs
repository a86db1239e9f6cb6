//! User update route.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use util::state::AppState;

use super::common::UpdateUserReq;
use crate::response::ApiResponse;
use db::models::user::Entity as UserEntity;

/// PUT `/user/{id}`
///
/// Update a user's name and/or email. The legacy surface addresses updates
/// by user id, unlike the other `/user/{email}` routes.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` if the id is unknown
/// - `500 Internal Server Error` on store failure
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateUserReq>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    let db = state.db();

    let user = match UserEntity::find_by_id(&id).one(db).await {
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
                Json(ApiResponse::error("Failed to update user")),
            );
        }
    };

    let mut active = user.into_active_model();
    if let Some(name) = body.name {
        active.name = Set(name);
    }
    if let Some(email) = body.email {
        active.email = Set(email);
    }
    active.updated_at = Set(Utc::now());

    match active.update(db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "User updated successfully")),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to update user")),
        ),
    }
}
