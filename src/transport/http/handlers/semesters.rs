#[allow(unused_imports)]
use crate::domain::model::NewSemester;
#[allow(unused_imports)]
use crate::transport::http::types::ErrorResponse;
use crate::domain::model::{EntityKind, Semester};
use crate::transport::http::handlers::common::{json_body, record_id, ApiError, ApiResult};
use crate::transport::http::types::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    post,
    path = "/api/semester",
    request_body = NewSemester,
    responses(
        (status = 201, description = "Semester created", body = Semester),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        )
    )
)]
pub async fn create_semester_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Semester>)> {
    let raw = json_body(body)?;
    let semester = state.catalog.create_semester(&raw).await?;
    Ok((StatusCode::CREATED, Json(semester)))
}

#[utoipa::path(
    get,
    path = "/api/semesters",
    responses(
        (status = 200, description = "All semesters in creation order", body = [Semester]),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        )
    )
)]
pub async fn list_semesters_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Semester>>> {
    Ok(Json(state.catalog.list_semesters().await?))
}

#[utoipa::path(
    get,
    path = "/api/semesters/{id}",
    params(
        ("id" = i32, Path, description = "Semester id")
    ),
    responses(
        (status = 200, description = "Semester found", body = Semester),
        (
            status = 404,
            description = "No semester with this id",
            body = ErrorResponse
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        )
    )
)]
pub async fn get_semester_handler(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Semester>> {
    let id = record_id(path, EntityKind::Semester)?;
    state
        .catalog
        .get_semester(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(EntityKind::Semester))
}
