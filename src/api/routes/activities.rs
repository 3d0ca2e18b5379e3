//! Activities Routes
//!
//! - GET /activities - The full activity collection in server order

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::ActivityMap;
use crate::api::state::AppState;

/// GET /activities
///
/// Return the whole roster as a JSON object keyed by activity name.
/// Clients replace their view wholesale with each response.
pub async fn list_activities(State(state): State<Arc<AppState>>) -> Json<ActivityMap> {
    let entries = state.registry.snapshot().await;
    Json(ActivityMap(entries))
}
