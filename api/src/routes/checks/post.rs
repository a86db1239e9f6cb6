//! Check session write routes: session creation and student check-in.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use services::attendance::{AttendanceError, AttendanceService, CheckOutcome, CheckinMode};
use util::state::AppState;

use super::common::{CheckInReq, CheckRecordResponse, CheckSessionResponse, CreateCheckSessionReq};
use crate::response::ApiResponse;
use db::models::check_session;

/// POST `/check`
///
/// Create a new check session.
///
/// ### Responses
/// - `201 Created` → the stored session
/// - `500 Internal Server Error` on store failure (including duplicate name)
pub async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<CreateCheckSessionReq>,
) -> (StatusCode, Json<ApiResponse<Option<CheckSessionResponse>>>) {
    let db = state.db();
    let now = Utc::now();

    let session = check_session::ActiveModel {
        subject_id: Set(body.sid),
        name: Set(body.name),
        date: Set(body.date.unwrap_or(now)),
        status: Set(body.status.unwrap_or_default()),
        section: Set(body.section.unwrap_or_default()),
        passcodes: Set(serde_json::json!(body.passcodes)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match session.insert(db).await {
        Ok(row) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(CheckSessionResponse::from_session(row, Vec::new())),
                "Check session created successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!(
                "Failed to create check session: {e}"
            ))),
        ),
    }
}

/// POST `/check/{name}/std`
///
/// Student check-in against the named session.
///
/// Closed-session and passcode-mismatch rejections are **business
/// outcomes**: they come back as `200 OK` with `success: false` and a
/// descriptive message, so legacy callers that inspect the body keep
/// working.
///
/// ### Responses
/// - `200 OK` → recorded check, or a rejection message
/// - `400 Bad Request` on a malformed body
/// - `404 Not Found` if the session does not exist
/// - `500 Internal Server Error` on store failure
pub async fn check_in(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<CheckInReq>,
) -> (StatusCode, Json<ApiResponse<Option<CheckRecordResponse>>>) {
    let db = state.db();
    let mode = CheckinMode::from_config();

    match AttendanceService::check_in(db, mode, &name, &body.student_id, &body.submitted_passcode)
        .await
    {
        Ok(CheckOutcome::Recorded(record)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(CheckRecordResponse::from(record)),
                "Check recorded successfully",
            )),
        ),
        Ok(CheckOutcome::Closed) => (
            StatusCode::OK,
            Json(ApiResponse::error("Check session is no longer accepting check-ins")),
        ),
        Ok(CheckOutcome::PasscodeMismatch) => (
            StatusCode::OK,
            Json(ApiResponse::error("Incorrect passcode")),
        ),
        Err(AttendanceError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Check session not found")),
        ),
        Err(AttendanceError::Store(_)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to record check")),
        ),
    }
}
