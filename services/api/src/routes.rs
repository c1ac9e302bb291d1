use crate::infra::{deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use prevention_sst::error::AppError;
use prevention_sst::workflows::prevention::{
    export_to_markdown, program_router, PreventionProgramGenerator, ProgramRepository,
    PreventionProgramService,
};
use prevention_sst::workflows::roster::RosterImporter;

#[derive(Debug, Deserialize)]
pub(crate) struct RosterBatchRequest {
    /// Raw roster CSV (Établissement, Secteur, Code SCIAN, Effectif, Activités).
    pub(crate) roster_csv: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) include_markdown: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct RosterBatchResponse {
    pub(crate) today: NaiveDate,
    pub(crate) programs: Vec<RosterBatchEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RosterBatchEntry {
    pub(crate) company_name: String,
    pub(crate) sector: String,
    pub(crate) company_size: u32,
    pub(crate) section_count: usize,
    pub(crate) participation_mechanism: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) markdown: Option<String>,
}

pub(crate) fn with_program_routes<R>(
    service: Arc<PreventionProgramService<R>>,
) -> axum::Router
where
    R: ProgramRepository + 'static,
{
    program_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/prevention/roster",
            axum::routing::post(roster_batch_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn roster_batch_endpoint(
    Json(payload): Json<RosterBatchRequest>,
) -> Result<Json<RosterBatchResponse>, AppError> {
    let RosterBatchRequest {
        roster_csv,
        today,
        include_markdown,
    } = payload;

    let reader = Cursor::new(roster_csv.into_bytes());
    let profiles = RosterImporter::from_reader(reader)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let programs = profiles
        .iter()
        .map(|profile| {
            let program = PreventionProgramGenerator::generate_program_on(profile, today);
            let markdown = include_markdown.then(|| export_to_markdown(&program));
            RosterBatchEntry {
                company_name: program.company_info.name.clone(),
                sector: program.company_info.sector.clone(),
                company_size: program.company_info.size,
                section_count: program.sections.len(),
                participation_mechanism: program.sections[6].title.clone(),
                markdown,
            }
        })
        .collect();

    Ok(Json(RosterBatchResponse { today, programs }))
}
