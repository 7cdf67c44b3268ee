#[allow(unused_imports)]
use crate::domain::model::NewUnit;
#[allow(unused_imports)]
use crate::transport::http::types::ErrorResponse;
use crate::domain::model::{EntityKind, Unit};
use crate::transport::http::handlers::common::{json_body, record_id, ApiError, ApiResult};
use crate::transport::http::types::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    post,
    path = "/api/unit",
    request_body = NewUnit,
    responses(
        (status = 201, description = "Unit created", body = Unit),
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
pub async fn create_unit_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Unit>)> {
    let raw = json_body(body)?;
    let unit = state.catalog.create_unit(&raw).await?;
    Ok((StatusCode::CREATED, Json(unit)))
}

#[utoipa::path(
    get,
    path = "/api/units",
    responses(
        (status = 200, description = "All units in creation order", body = [Unit]),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        )
    )
)]
pub async fn list_units_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Unit>>> {
    Ok(Json(state.catalog.list_units().await?))
}

#[utoipa::path(
    get,
    path = "/api/units/{id}",
    params(
        ("id" = i32, Path, description = "Unit id")
    ),
    responses(
        (status = 200, description = "Unit found", body = Unit),
        (
            status = 404,
            description = "No unit with this id",
            body = ErrorResponse
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        )
    )
)]
pub async fn get_unit_handler(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Unit>> {
    let id = record_id(path, EntityKind::Unit)?;
    state
        .catalog
        .get_unit(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(EntityKind::Unit))
}
