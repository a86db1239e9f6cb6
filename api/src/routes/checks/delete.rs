//! Check session delete routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use services::attendance::{AttendanceError, AttendanceService};
use util::state::AppState;

use crate::response::ApiResponse;
use db::models::check_session::{Column as SessionCol, Entity as SessionEntity};

/// DELETE `/check/{name}`
///
/// Delete the named session. Its check records go with it.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` if no session matched
/// - `500 Internal Server Error` on store failure
pub async fn delete_session(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    let db = state.db();

    let res = SessionEntity::delete_many()
        .filter(SessionCol::Name.eq(&name))
        .exec(db)
        .await;

    match res {
        Ok(dr) if dr.rows_affected > 0 => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Check session deleted successfully")),
        ),
        Ok(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Check session not found")),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to delete check session")),
        ),
    }
}

/// DELETE `/checkname/{name}/check/{student_id}`
///
/// Remove every check the student has in the named session. Removing an id
/// with no checks is a success no-op.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` if the session is absent
/// - `500 Internal Server Error` on store failure
pub async fn remove_student_checks(
    State(state): State<AppState>,
    Path((name, student_id)): Path<(String, String)>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    let db = state.db();

    match AttendanceService::remove_student(db, &name, &student_id).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Checks removed successfully")),
        ),
        Err(AttendanceError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Check session not found")),
        ),
        Err(AttendanceError::Store(_)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to remove checks")),
        ),
    }
}
