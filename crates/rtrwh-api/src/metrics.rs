//! Prometheus metrics for the estimator API

use prometheus::{
    Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
    register_int_counter_with_registry, register_int_gauge_with_registry,
};
use rtrwh_types::CalculationType;
use tracing::{debug, info};

/// Metrics collector for the API
#[derive(Clone, Debug)]
pub struct ApiMetrics {
    registry: Registry,
    /// Completed calculations, labelled by calculation type
    pub calculations_total: IntCounterVec,
    /// Requests rejected by input validation
    pub validation_failures_total: IntCounter,
    /// Submissions currently held in the store
    pub submissions_stored: IntGauge,
}

impl ApiMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        info!("Initializing API metrics");

        let registry = Registry::new();

        let calculations_total = IntCounterVec::new(
            Opts::new("rtrwh_calculations_total", "Total number of completed calculations."),
            &["type"],
        )?;
        registry.register(Box::new(calculations_total.clone()))?;

        let validation_failures_total = register_int_counter_with_registry!(
            "rtrwh_validation_failures_total",
            "Total number of submissions rejected by input validation.",
            &registry
        )?;
        let submissions_stored = register_int_gauge_with_registry!(
            "rtrwh_submissions_stored",
            "Number of submissions currently stored.",
            &registry
        )?;

        Ok(Self { registry, calculations_total, validation_failures_total, submissions_stored })
    }

    pub fn record_calculation(&self, calculation_type: CalculationType, stored: usize) {
        let label = calculation_type.to_string();
        self.calculations_total.with_label_values(&[label.as_str()]).inc();
        self.submissions_stored.set(i64::try_from(stored).unwrap_or(i64::MAX));
        debug!(calculation_type = %label, stored, "Recorded calculation");
    }

    pub fn record_validation_failure(&self) {
        self.validation_failures_total.inc();
    }

    /// Render all metrics in the Prometheus text exposition format
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
