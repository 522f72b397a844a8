#![deny(warnings)]
//! RTRWH/AR Estimator HTTP API
//!
//! Axum service in front of the calculation engine: validates submissions,
//! runs the engine, keeps the resulting submissions in memory and exposes
//! metrics and an OpenAPI document.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use rtrwh_core::{CalculationEngine, ReferenceData};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod store;
pub mod tracing_setup;
pub mod types;
pub mod validation;

use config::RtrwhConfig;
use metrics::ApiMetrics;
use store::SubmissionStore;

/// Shared state handed to every handler
#[derive(Debug)]
pub struct AppState {
    pub start_time: DateTime<Utc>,
    pub engine: Arc<CalculationEngine>,
    pub store: SubmissionStore,
    pub metrics: ApiMetrics,
}

impl AppState {
    pub fn new(engine: Arc<CalculationEngine>, max_submissions: usize) -> anyhow::Result<Self> {
        let metrics = ApiMetrics::new().context("Failed to register metrics")?;
        Ok(Self {
            start_time: Utc::now(),
            engine,
            store: SubmissionStore::new(max_submissions),
            metrics,
        })
    }

    pub fn elapsed(&self) -> Duration {
        (Utc::now() - self.start_time).to_std().unwrap_or_default()
    }
}

/// Load reference data from the configured paths and build an engine over it.
pub fn build_engine(config: &RtrwhConfig) -> anyhow::Result<CalculationEngine> {
    let reference = ReferenceData::load(
        config.data.cities_path.as_deref(),
        config.data.coefficients_path.as_deref(),
    )
    .context("Failed to load reference data")?;
    Ok(CalculationEngine::new(Arc::new(reference)))
}

/// Build the application router from configuration.
pub fn create_app(config: &RtrwhConfig) -> anyhow::Result<Router> {
    let engine = Arc::new(build_engine(config)?);
    let state = Arc::new(AppState::new(engine, config.limits.max_submissions)?);

    info!(
        cities = state.engine.reference_data().cities().len(),
        max_submissions = config.limits.max_submissions,
        "Application state initialized"
    );

    Ok(router(state, config.max_body_size_bytes()))
}

pub fn router(state: Arc<AppState>, max_body_size_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .route("/api-docs/openapi.json", get(handlers::openapi))
        .route("/api/cities", get(handlers::list_cities))
        .route("/api/calculate", post(handlers::calculate))
        .route("/api/submissions", get(handlers::list_submissions))
        .route("/api/submissions/{id}", get(handlers::get_submission))
        .layer(RequestBodyLimitLayer::new(max_body_size_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
