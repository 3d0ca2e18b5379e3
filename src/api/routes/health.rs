//! Health Routes
//!
//! Health check endpoints for monitoring.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Liveness probe. Returns 200 if the process is alive.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status. The roster lives in memory, so reading its size is
/// both the health check and the only dependency probe there is.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let activities = state.registry.len().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        activities,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
