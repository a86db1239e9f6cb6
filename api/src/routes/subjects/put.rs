//! Subject update route.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use util::state::AppState;

use super::common::UpdateSubjectReq;
use crate::response::ApiResponse;
use db::models::subject::Entity as SubjectEntity;

/// PUT `/subject/{id}`
///
/// Update any of a subject's mutable fields.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` if the id is unknown
/// - `500 Internal Server Error` on store failure
pub async fn update_subject(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateSubjectReq>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    let db = state.db();

    let subject = match SubjectEntity::find_by_id(&id).one(db).await {
        Ok(Some(subject)) => subject,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Subject not found")),
            );
        }
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to update subject")),
            );
        }
    };

    let mut active = subject.into_active_model();
    if let Some(name) = body.name {
        active.name = Set(name);
    }
    if let Some(term) = body.term {
        active.term = Set(term);
    }
    if let Some(year) = body.year {
        active.year = Set(year);
    }
    if let Some(image) = body.image {
        active.image = Set(image);
    }
    if let Some(sections) = body.sections {
        active.sections = Set(serde_json::to_value(&sections).unwrap_or_default());
    }

    match active.update(db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Subject updated successfully")),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to update subject")),
        ),
    }
}
