//! Health and counters
//!
//! `/health` is mounted at the root for load balancers; the same handler and
//! the metrics snapshot live under `/observability`.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::observability::{MetricsRegistry, MetricsSnapshot};

/// Shared by the health and metrics handlers
pub struct ObservabilityState {
    pub metrics: Arc<MetricsRegistry>,
    pub backend: &'static str,
}

/// Health check body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub backend: &'static str,
}

pub fn observability_routes(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

pub fn health_routes(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn health_handler(State(state): State<Arc<ObservabilityState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        backend: state.backend,
    })
}

async fn metrics_handler(State(state): State<Arc<ObservabilityState>>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
