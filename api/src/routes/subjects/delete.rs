//! Subject delete route.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::response::ApiResponse;
use db::models::subject::Entity as SubjectEntity;

/// DELETE `/subject/{id}`
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` if no subject matched
/// - `500 Internal Server Error` on store failure
pub async fn delete_subject(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    match SubjectEntity::delete_by_id(&id).exec(state.db()).await {
        Ok(dr) if dr.rows_affected > 0 => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Subject deleted successfully")),
        ),
        Ok(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Subject not found")),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to delete subject")),
        ),
    }
}
