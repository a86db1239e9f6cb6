//! Subject read-only routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::{EntityTrait, QueryOrder};
use util::state::AppState;

use super::common::SubjectResponse;
use crate::response::ApiResponse;
use db::models::subject::{Column as SubjectCol, Entity as SubjectEntity};

/// GET `/subjects`
///
/// List every subject offering.
pub async fn list_subjects(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<Vec<SubjectResponse>>>) {
    match SubjectEntity::find()
        .order_by_asc(SubjectCol::Id)
        .all(state.db())
        .await
    {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                rows.into_iter().map(SubjectResponse::from).collect(),
                "Subjects retrieved",
            )),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to retrieve subjects")),
        ),
    }
}

/// GET `/subject/{id}`
///
/// ### Responses
/// - `200 OK` → `SubjectResponse`
/// - `404 Not Found` if the id is unknown
pub async fn get_subject(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Json<ApiResponse<Option<SubjectResponse>>>) {
    match SubjectEntity::find_by_id(&id).one(state.db()).await {
        Ok(Some(subject)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(SubjectResponse::from(subject)),
                "Subject retrieved",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Subject not found")),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to retrieve subject")),
        ),
    }
}
