//! Check session lifecycle route.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, IntoActiveModel, Set};
use services::attendance::{AttendanceError, AttendanceService};
use util::state::AppState;

use super::common::UpdateStatusReq;
use crate::response::ApiResponse;

/// PUT `/check/{name}/status`
///
/// Open or close the named session. Closing stops the check-in gate; the
/// session and its records stay readable.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` if the session is absent
/// - `500 Internal Server Error` on store failure
pub async fn update_session_status(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<UpdateStatusReq>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    let db = state.db();

    let session = match AttendanceService::resolve_by_name(db, &name).await {
        Ok(session) => session,
        Err(AttendanceError::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Check session not found")),
            );
        }
        Err(AttendanceError::Store(_)) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to update check session")),
            );
        }
    };

    let mut active = session.into_active_model();
    active.status = Set(body.status);
    active.updated_at = Set(Utc::now());

    match active.update(db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Check session status updated")),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to update check session")),
        ),
    }
}
