use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use super::catalog::CatalogEntry;
use super::service::CalculatorService;
use super::{CalculatorError, CalculatorKind};
use crate::error::AppError;
use crate::evaluator::EvaluationResult;

/// Router builder exposing the catalog and evaluation endpoints.
pub fn calculator_router(service: Arc<CalculatorService>) -> Router {
    Router::new()
        .route("/api/v1/calculators", get(catalog_handler))
        .route("/api/v1/calculators/:slug", get(entry_handler))
        .route("/api/v1/calculators/:slug/evaluate", post(evaluate_handler))
        .with_state(service)
}

pub(crate) async fn catalog_handler(State(service): State<Arc<CalculatorService>>) -> Json<Value> {
    Json(json!({ "calculators": service.catalog() }))
}

pub(crate) async fn entry_handler(
    State(service): State<Arc<CalculatorService>>,
    Path(slug): Path<String>,
) -> Result<Json<CatalogEntry>, AppError> {
    Ok(Json(service.entry(&slug)?.clone()))
}

/// Resolves the slug before parsing the raw body, so an unknown calculator is reported as 404
/// even when the body is broken.
pub(crate) async fn evaluate_handler(
    State(service): State<Arc<CalculatorService>>,
    Path(slug): Path<String>,
    body: Bytes,
) -> Result<Json<EvaluationResult>, AppError> {
    let kind: CalculatorKind = slug.parse()?;
    let payload: Value = serde_json::from_slice(&body).map_err(CalculatorError::MalformedInput)?;

    let delay = service.processing_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    Ok(Json(service.evaluate(kind.slug(), payload)?))
}
