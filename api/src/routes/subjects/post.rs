//! Subject creation route.

use axum::{Json, extract::State, http::StatusCode};
use sea_orm::{ActiveModelTrait, Set};
use util::state::AppState;

use super::common::{CreateSubjectReq, SubjectResponse};
use crate::response::ApiResponse;
use db::models::subject;

/// POST `/subject`
///
/// Create a subject offering.
///
/// ### Responses
/// - `201 Created` → `SubjectResponse`
/// - `400 Bad Request` on a malformed body
/// - `500 Internal Server Error` on store failure
pub async fn create_subject(
    State(state): State<AppState>,
    Json(body): Json<CreateSubjectReq>,
) -> (StatusCode, Json<ApiResponse<Option<SubjectResponse>>>) {
    let sections = serde_json::to_value(&body.sections).unwrap_or_default();

    let created = subject::ActiveModel {
        id: Set(body.id),
        name: Set(body.name),
        term: Set(body.term),
        year: Set(body.year),
        image: Set(body.image),
        sections: Set(sections),
    }
    .insert(state.db())
    .await;

    match created {
        Ok(row) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(SubjectResponse::from(row)),
                "Subject added successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to create subject: {e}"))),
        ),
    }
}
