//! End-to-end tests of the HTTP API

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_test::TestServer;
use rtrwh_api::{
    AppState, config::RtrwhConfig, create_app, error::ApiErrorResponse, router,
    types::{CitySummary, HealthResponse},
};
use rtrwh_core::types::{CalculationType, MatchedBy, UserSubmission};
use rtrwh_core::{CalculationEngine, ReferenceData};
use serde_json::{Value, json};
use tower::ServiceExt;

fn create_test_server() -> TestServer {
    let app = create_app(&RtrwhConfig::default()).expect("Failed to create app");
    TestServer::new(app).expect("Failed to create test server")
}

fn create_router(max_submissions: usize, max_body_size_bytes: usize) -> axum::Router {
    let engine = Arc::new(CalculationEngine::new(Arc::new(ReferenceData::builtin().unwrap())));
    let state = Arc::new(AppState::new(engine, max_submissions).unwrap());
    router(state, max_body_size_bytes)
}

fn create_server_with_capacity(max_submissions: usize) -> TestServer {
    TestServer::new(create_router(max_submissions, 64 * 1024))
        .expect("Failed to create test server")
}

fn oversized_request() -> Value {
    let mut input = chennai_input();
    input["name"] = json!("x".repeat(4096));
    request(input, "rainwater")
}

fn chennai_input() -> Value {
    json!({
        "name": "Meena",
        "location": "Chennai",
        "pincode": "600041",
        "roofArea": 100.0,
        "roofType": "RCC",
        "environment": "Residential",
        "birdNesting": false,
        "dwellers": 4,
        "usagePurpose": "Domestic",
        "hasOpenSpace": true,
        "openSpaceArea": 40.0,
        "groundwaterDepth": 6.0,
        "soilType": "Sandy",
        "budget": "Medium"
    })
}

fn request(input: Value, calculation_type: &str) -> Value {
    json!({ "input": input, "calculationType": calculation_type })
}

#[tokio::test]
async fn test_health() {
    let server = create_test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let health: HealthResponse = response.json();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.cities_loaded, 16);
    assert_eq!(health.submissions, 0);
}

#[tokio::test]
async fn test_list_cities() {
    let server = create_test_server();

    let cities: Vec<CitySummary> = server.get("/api/cities").await.json();
    assert_eq!(cities.len(), 16);
    assert!(cities.iter().any(|c| c.city == "Chennai" && c.pincode_prefix == "600"));
}

#[tokio::test]
async fn test_calculate_rainwater_stores_submission() {
    let server = create_test_server();

    let response = server.post("/api/calculate").json(&request(chennai_input(), "rainwater")).await;
    response.assert_status_ok();

    let submission: UserSubmission = response.json();
    assert_eq!(submission.calculation_type, CalculationType::Rainwater);
    assert_eq!(submission.results.city.city, "Chennai");
    assert_eq!(submission.results.city.matched_by, MatchedBy::Pincode);
    assert!(submission.results.recharge_volume.is_none());
    assert!(submission.results.pit_dimensions.is_none());

    let raw: Value = response.json();
    assert!(raw["results"].get("rechargeVolume").is_none());

    let fetched: UserSubmission =
        server.get(&format!("/api/submissions/{}", submission.id)).await.json();
    assert_eq!(fetched, submission);

    let health: HealthResponse = server.get("/health").await.json();
    assert_eq!(health.submissions, 1);
}

#[tokio::test]
async fn test_calculate_recharge_includes_pit() {
    let server = create_test_server();

    let response = server.post("/api/calculate").json(&request(chennai_input(), "recharge")).await;
    response.assert_status_ok();

    let raw: Value = response.json();
    assert!(raw["results"]["rechargeVolume"].as_f64().unwrap() > 0.0);
    assert!(raw["results"]["pitDimensions"]["lengthM"].as_f64().unwrap() >= 3.0);
}

#[tokio::test]
async fn test_submissions_listed_newest_first() {
    let server = create_test_server();

    let first: UserSubmission =
        server.post("/api/calculate").json(&request(chennai_input(), "rainwater")).await.json();
    let second: UserSubmission =
        server.post("/api/calculate").json(&request(chennai_input(), "recharge")).await.json();

    let listed: Vec<UserSubmission> = server.get("/api/submissions").await.json();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[tokio::test]
async fn test_validation_failure_names_field() {
    let server = create_test_server();

    let mut input = chennai_input();
    input["pincode"] = json!("60004");

    let response = server
        .post("/api/calculate")
        .json(&request(input, "rainwater"))
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let error: ApiErrorResponse = response.json();
    assert_eq!(error.code, "VALIDATION_ERROR");
    assert_eq!(error.details.unwrap()["field"], "pincode");

    let submissions: Vec<UserSubmission> = server.get("/api/submissions").await.json();
    assert!(submissions.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_validation_error() {
    let server = create_test_server();

    let response = server
        .post("/api/calculate")
        .json(&json!({ "input": { "name": "x" }, "calculationType": "rainwater" }))
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let error: ApiErrorResponse = response.json();
    assert_eq!(error.code, "VALIDATION_ERROR");

    let response = server
        .post("/api/calculate")
        .json(&request(chennai_input(), "drainage"))
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_submission_is_not_found() {
    let server = create_test_server();

    let response = server
        .get("/api/submissions/7b0c3f5e-2a51-4d7e-9b61-0c6f1a2e8d44")
        .expect_failure()
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let error: ApiErrorResponse = response.json();
    assert_eq!(error.code, "NOT_FOUND");

    let response = server.get("/api/submissions/not-a-uuid").expect_failure().await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_full_store_rejects_new_submissions() {
    let server = create_server_with_capacity(1);

    server
        .post("/api/calculate")
        .json(&request(chennai_input(), "rainwater"))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/calculate")
        .json(&request(chennai_input(), "rainwater"))
        .expect_failure()
        .await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let error: ApiErrorResponse = response.json();
    assert_eq!(error.code, "STORAGE_ERROR");
}

#[tokio::test]
async fn test_metrics_reflect_activity() {
    let server = create_test_server();

    server.post("/api/calculate").json(&request(chennai_input(), "recharge")).await;
    let mut bad = chennai_input();
    bad["dwellers"] = json!(0);
    server.post("/api/calculate").json(&request(bad, "recharge")).expect_failure().await;

    let text = server.get("/metrics").await.text();
    assert!(text.contains("rtrwh_calculations_total{type=\"recharge\"} 1"));
    assert!(text.contains("rtrwh_validation_failures_total 1"));
    assert!(text.contains("rtrwh_submissions_stored 1"));
}

#[tokio::test]
async fn test_openapi_document_served() {
    let server = create_test_server();

    let doc: Value = server.get("/api-docs/openapi.json").await.json();
    assert!(doc["paths"]["/api/calculate"]["post"].is_object());
    assert!(doc["components"]["schemas"]["UserSubmission"].is_object());
}

#[tokio::test]
async fn test_oversized_body_is_payload_too_large() {
    let server = TestServer::new(create_router(10, 1024)).unwrap();

    let response = server
        .post("/api/calculate")
        .json(&oversized_request())
        .expect_failure()
        .await;
    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_streamed_body_over_limit_is_payload_too_large() {
    let app = create_router(10, 1024);

    // Chunked upload with no Content-Length, so the limit trips while buffering
    let body = serde_json::to_vec(&oversized_request()).unwrap();
    let chunks: Vec<Result<Vec<u8>, std::io::Error>> =
        body.chunks(256).map(|chunk| Ok(chunk.to_vec())).collect();
    let request = Request::post("/api/calculate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from_stream(futures_util::stream::iter(chunks)))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let error: ApiErrorResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error.code, "PAYLOAD_TOO_LARGE");
}
