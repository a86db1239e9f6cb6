//! Check session read-only routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use services::attendance::{AttendanceError, AttendanceService};
use util::state::AppState;

use super::common::{CheckRecordResponse, CheckSessionResponse};
use crate::response::ApiResponse;

/// GET `/check/{sid}`
///
/// Fetch the check session owned by a subject, with its full check sequence.
///
/// ### Responses
/// - `200 OK` → `CheckSessionResponse`
/// - `404 Not Found` if no session exists for the subject
/// - `500 Internal Server Error` on store failure
pub async fn get_session_for_subject(
    State(state): State<AppState>,
    Path(subject_id): Path<String>,
) -> (StatusCode, Json<ApiResponse<Option<CheckSessionResponse>>>) {
    let db = state.db();

    let session = match AttendanceService::resolve_by_subject(db, &subject_id).await {
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
                Json(ApiResponse::error("Failed to retrieve check session")),
            );
        }
    };

    match AttendanceService::list_checks(db, &session.name).await {
        Ok(checks) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(CheckSessionResponse::from_session(session, checks)),
                "Check session retrieved",
            )),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to retrieve check session")),
        ),
    }
}

/// GET `/checkname/{name}/check`
///
/// List every check recorded for the named session, in append order.
///
/// ### Responses
/// - `200 OK` → ordered `CheckRecordResponse` sequence
/// - `404 Not Found` if the session is absent
/// - `500 Internal Server Error` on store failure
pub async fn list_session_checks(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> (StatusCode, Json<ApiResponse<Vec<CheckRecordResponse>>>) {
    let db = state.db();

    match AttendanceService::list_checks(db, &name).await {
        Ok(checks) => {
            let records: Vec<CheckRecordResponse> =
                checks.into_iter().map(CheckRecordResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(records, "Checks retrieved")),
            )
        }
        Err(AttendanceError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Check session not found")),
        ),
        Err(AttendanceError::Store(_)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to retrieve checks")),
        ),
    }
}
