//! Registration Routes
//!
//! Mutations on an activity's participant list.
//!
//! - POST /activities/:name/signup?email= - Add a participant
//! - POST /activities/:name/unregister?email= - Remove a participant
//!
//! Both respond `{"message": ...}` on success; failures carry
//! `{"detail": ...}` with 400 (duplicate, full) or 404 (unknown activity,
//! unknown participant).

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{EmailQuery, MessageResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// POST /activities/:name/signup
///
/// Sign `email` up for the named activity. The email is taken as-is; a
/// missing `email` parameter is already rejected by the query extractor.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let message = state.registry.signup(&name, &query.email).await?;

    tracing::info!(activity = %name, email = %query.email, "Participant signed up");

    Ok(Json(MessageResponse { message }))
}

/// POST /activities/:name/unregister
///
/// Remove `email` from the named activity.
pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let message = state.registry.unregister(&name, &query.email).await?;

    tracing::info!(activity = %name, email = %query.email, "Participant unregistered");

    Ok(Json(MessageResponse { message }))
}
