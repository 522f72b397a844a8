//! Route handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Json},
};
use chrono::Utc;
use rtrwh_types::UserSubmission;
use tracing::{info, instrument, warn};
use utoipa::OpenApi;
use uuid::Uuid;

use crate::AppState;
#[allow(unused_imports)] // referenced only inside #[utoipa::path] attributes
use crate::error::ApiErrorResponse;
use crate::error::{ApiError, ApiResult};
use crate::types::{ApiDoc, CalculateRequest, CitySummary, HealthResponse};
use crate::validation::validate_input;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.elapsed().as_secs(),
        cities_loaded: state.engine.reference_data().cities().len(),
        submissions: state.store.len(),
    })
}

#[utoipa::path(
    get,
    path = "/api/cities",
    responses((status = 200, description = "Cities in the reference table", body = [CitySummary]))
)]
pub async fn list_cities(State(state): State<Arc<AppState>>) -> Json<Vec<CitySummary>> {
    Json(state.engine.reference_data().cities().iter().map(CitySummary::from).collect())
}

#[utoipa::path(
    post,
    path = "/api/calculate",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Calculation stored", body = UserSubmission),
        (status = 400, description = "Invalid input", body = ApiErrorResponse),
        (status = 413, description = "Request body too large", body = ApiErrorResponse),
        (status = 422, description = "Engine could not calculate", body = ApiErrorResponse),
        (status = 503, description = "Submission store is full", body = ApiErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> ApiResult<Json<UserSubmission>> {
    let Json(request) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::payload_too_large(rejection.body_text());
        }
        state.metrics.record_validation_failure();
        ApiError::validation(rejection.body_text())
    })?;

    if let Err(err) = validate_input(&request.input) {
        state.metrics.record_validation_failure();
        warn!(error = %err, "Rejected submission");
        return Err(err.into());
    }

    let results = state.engine.calculate(&request.input, request.calculation_type)?;
    let submission = UserSubmission {
        id: Uuid::new_v4(),
        input: request.input,
        calculation_type: request.calculation_type,
        results,
        created_at: Utc::now(),
    };

    state.store.insert(submission.clone())?;
    state.metrics.record_calculation(submission.calculation_type, state.store.len());

    info!(
        submission_id = %submission.id,
        calculation_type = %submission.calculation_type,
        city = %submission.results.city.city,
        score = submission.results.feasibility.score,
        "Stored submission"
    );

    Ok(Json(submission))
}

#[utoipa::path(
    get,
    path = "/api/submissions",
    responses((status = 200, description = "All submissions, newest first", body = [UserSubmission]))
)]
pub async fn list_submissions(State(state): State<Arc<AppState>>) -> Json<Vec<UserSubmission>> {
    Json(state.store.list())
}

#[utoipa::path(
    get,
    path = "/api/submissions/{id}",
    params(("id" = String, Path, description = "Submission identifier")),
    responses(
        (status = 200, description = "The submission", body = UserSubmission),
        (status = 400, description = "Malformed identifier", body = ApiErrorResponse),
        (status = 404, description = "No such submission", body = ApiErrorResponse)
    )
)]
pub async fn get_submission(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserSubmission>> {
    let uuid = Uuid::parse_str(&id)
        .map_err(|_| ApiError::validation_field("id", format!("'{id}' is not a valid UUID")))?;

    state
        .store
        .get(&uuid)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("submission {uuid}")))
}

pub async fn metrics(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let body = state
        .metrics
        .render()
        .map_err(|e| ApiError::internal(format!("Failed to render metrics: {e}")))?;
    Ok(([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body))
}

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
