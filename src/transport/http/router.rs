use crate::domain::model::{NewSemester, NewUnit, Semester, Unit};
use crate::domain::validate::FieldError;
use crate::transport::http::handlers::{health, semesters, units};
use crate::transport::http::types::{AppState, ErrorResponse, HealthResponse};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        semesters::create_semester_handler,
        semesters::list_semesters_handler,
        semesters::get_semester_handler,
        units::create_unit_handler,
        units::list_units_handler,
        units::get_unit_handler
    ),
    components(schemas(
        NewSemester,
        Semester,
        NewUnit,
        Unit,
        FieldError,
        ErrorResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/semester", post(semesters::create_semester_handler))
        .route("/api/semesters", get(semesters::list_semesters_handler))
        .route("/api/semesters/:id", get(semesters::get_semester_handler))
        .route("/api/unit", post(units::create_unit_handler))
        .route("/api/units", get(units::list_units_handler))
        .route("/api/units/:id", get(units::get_unit_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
