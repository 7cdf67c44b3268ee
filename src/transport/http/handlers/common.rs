use crate::app::catalog_service::ServiceError;
use crate::domain::model::EntityKind;
use crate::domain::validate::{FieldError, ValidationErrors};
use crate::transport::http::types::ErrorResponse;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Everything a handler can fail with, mapped to a status code and an
/// `ErrorResponse` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error")]
    Validation(ValidationErrors),

    #[error("{0} not found")]
    NotFound(EntityKind),

    /// Details are logged, never sent to the caller.
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => ApiError::Validation(errors),
            ServiceError::Storage(e) => ApiError::Internal(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        let errors = match self {
            ApiError::Validation(errors) => Some(errors.into_errors()),
            ApiError::Internal(e) => {
                error!("request failed: {:#}", e);
                None
            }
            ApiError::NotFound(_) => None,
        };
        (status, Json(ErrorResponse { message, errors })).into_response()
    }
}

/// Unwraps a JSON body, reporting unparseable input as a validation failure
/// on the whole submission.
pub fn json_body(body: Result<Json<JsonValue>, JsonRejection>) -> ApiResult<JsonValue> {
    match body {
        Ok(Json(v)) => Ok(v),
        Err(e) => Err(ApiError::Validation(ValidationErrors::single(FieldError::root(
            format!("Invalid JSON body: {}", e.body_text()),
        )))),
    }
}

/// Unwraps a numeric id path segment. Ids that cannot exist are reported as
/// missing records.
pub fn record_id(path: Result<Path<i32>, PathRejection>, kind: EntityKind) -> ApiResult<i32> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(_) => Err(ApiError::NotFound(kind)),
    }
}
