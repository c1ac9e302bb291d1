use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::prevention::router::{self, program_router};
use crate::workflows::prevention::service::PreventionProgramService;

fn service() -> Arc<PreventionProgramService<MemoryRepository>> {
    Arc::new(PreventionProgramService::new(Arc::new(
        MemoryRepository::default(),
    )))
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("collect body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn generate_handler_returns_created_with_summary() {
    let service = service();

    let response = router::generate_handler::<MemoryRepository>(
        State(service),
        axum::Json(construction_profile()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["company_name"], "Toitures Gagnon");
    assert_eq!(body["section_count"], 9);
    assert!(body["program_id"]
        .as_str()
        .expect("program id string")
        .starts_with("prog-"));
}

#[tokio::test]
async fn generate_handler_maps_conflicts_to_409() {
    let service = Arc::new(PreventionProgramService::new(Arc::new(ConflictRepository)));

    let response =
        router::generate_handler::<ConflictRepository>(State(service), axum::Json(construction_profile()))
            .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn fetch_handler_maps_missing_records_to_404() {
    let service = service();

    let response = router::fetch_handler::<MemoryRepository>(
        State(service),
        axum::extract::Path("prog-999999".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["program_id"], "prog-999999");
}

#[tokio::test]
async fn full_router_serves_generate_then_markdown() {
    let service = service();
    let app = program_router(service);

    let generate_request = Request::builder()
        .method("POST")
        .uri("/api/v1/prevention/programs")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(&construction_profile()).expect("serialize profile"),
        ))
        .expect("build request");

    let response = app
        .clone()
        .oneshot(generate_request)
        .await
        .expect("router response");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    let program_id = body["program_id"].as_str().expect("program id").to_string();

    let markdown_request = Request::builder()
        .uri(format!("/api/v1/prevention/programs/{program_id}/markdown"))
        .body(Body::empty())
        .expect("build request");

    let response = app
        .oneshot(markdown_request)
        .await
        .expect("router response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/markdown; charset=utf-8")
    );

    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("collect body");
    let markdown = String::from_utf8(bytes.to_vec()).expect("utf8 body");
    assert!(markdown.starts_with("# Programme de pr\u{e9}vention"));
    assert!(markdown.contains("## ANNEXE E - APPROBATION ET TRANSMISSION"));
}

#[test]
fn service_assigns_unique_sequential_identifiers() {
    let service = service();

    let first = service
        .generate_on(construction_profile(), fixed_date())
        .expect("first record");
    let second = service
        .generate_on(micro_services_profile(), fixed_date())
        .expect("second record");

    assert_ne!(first.program_id, second.program_id);
    assert!(first.program_id.0.starts_with("prog-"));
}

#[test]
fn service_recent_returns_latest_records() {
    let service = service();

    for profile in [construction_profile(), large_manufacturer(), micro_services_profile()] {
        service.generate_on(profile, fixed_date()).expect("stored");
    }

    let recent = service.recent(2).expect("recent records");
    assert_eq!(recent.len(), 2);
}
