//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses. Failure bodies always carry the `{"detail": ...}`
//! shape the frontend displays verbatim.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::dto::DetailResponse;
use crate::registry::RegistryError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Registry operation failed
    #[error("{0}")]
    Registry(#[from] RegistryError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Registry(e) => match e {
                RegistryError::UnknownActivity(_) | RegistryError::NotRegistered { .. } => {
                    StatusCode::NOT_FOUND
                }
                RegistryError::AlreadyRegistered { .. } | RegistryError::ActivityFull(_) => {
                    StatusCode::BAD_REQUEST
                }
            },
            ApiError::Io(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(
            status = %status,
            error = %self,
            "API error occurred"
        );

        let body = DetailResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_errors_map_to_expected_statuses() {
        let cases = [
            (
                ApiError::from(RegistryError::UnknownActivity("X".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(RegistryError::NotRegistered {
                    activity: "X".into(),
                    email: "a@x.com".into(),
                }),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(RegistryError::AlreadyRegistered {
                    activity: "X".into(),
                    email: "a@x.com".into(),
                }),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(RegistryError::ActivityFull("X".into())),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
