use dunk_calc::calculators::CalculatorError;
use dunk_calc::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parse an input set given inline on the command line.
pub(crate) fn parse_payload(raw: &str) -> Result<Value, AppError> {
    serde_json::from_str(raw.trim())
        .map_err(|err| AppError::Calculator(CalculatorError::MalformedInput(err)))
}

pub(crate) fn read_payload_file(path: &Path) -> Result<Value, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_payload(&raw)
}
