//! Health endpoints

use crate::api::AppState;
use crate::core::HealthReport;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

/// `GET /health/live`
pub async fn live(State(state): State<Arc<AppState>>) -> (StatusCode, &'static str) {
    (StatusCode::OK, state.health.liveness().as_str())
}

/// `GET /health/ready`
pub async fn ready(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthReport>) {
    let report = state.health.readiness().await;

    let status = if report.status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(report))
}
