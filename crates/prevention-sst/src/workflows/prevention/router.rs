use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{CompanyProfile, ProgramId};
use super::repository::{ProgramRepository, RepositoryError};
use super::service::{PreventionProgramService, ProgramServiceError};

/// Router builder exposing HTTP endpoints for program generation and export.
pub fn program_router<R>(service: Arc<PreventionProgramService<R>>) -> Router
where
    R: ProgramRepository + 'static,
{
    Router::new()
        .route("/api/v1/prevention/programs", post(generate_handler::<R>))
        .route(
            "/api/v1/prevention/programs/:program_id",
            get(fetch_handler::<R>),
        )
        .route(
            "/api/v1/prevention/programs/:program_id/markdown",
            get(markdown_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn generate_handler<R>(
    State(service): State<Arc<PreventionProgramService<R>>>,
    axum::Json(profile): axum::Json<CompanyProfile>,
) -> Response
where
    R: ProgramRepository + 'static,
{
    match service.generate(profile) {
        Ok(record) => {
            let view = record.summary_view();
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(ProgramServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "program already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<PreventionProgramService<R>>>,
    Path(program_id): Path<String>,
) -> Response
where
    R: ProgramRepository + 'static,
{
    let id = ProgramId(program_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(ProgramServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "program_id": id.0,
                "error": "program not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn markdown_handler<R>(
    State(service): State<Arc<PreventionProgramService<R>>>,
    Path(program_id): Path<String>,
) -> Response
where
    R: ProgramRepository + 'static,
{
    let id = ProgramId(program_id);
    match service.markdown(&id) {
        Ok(markdown) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
            markdown,
        )
            .into_response(),
        Err(ProgramServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "program_id": id.0,
                "error": "program not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
