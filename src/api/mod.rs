//! Clubhouse REST API
//!
//! HTTP API layer, built with Axum.
//!
//! # Endpoints
//!
//! ## Activities
//! - `GET /activities` - Full activity collection, keyed by name
//! - `POST /activities/:name/signup?email=` - Sign a participant up
//! - `POST /activities/:name/unregister?email=` - Remove a participant
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! When a static asset directory is configured, the built frontend is
//! served as the router fallback.

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    let activity_routes = Router::new()
        .route("/activities", get(routes::activities::list_activities))
        .route(
            "/activities/:name/signup",
            post(routes::registration::signup),
        )
        .route(
            "/activities/:name/unregister",
            post(routes::registration::unregister),
        );

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    let mut router = Router::new()
        .merge(activity_routes)
        .nest("/health", health_routes)
        .with_state(shared_state);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Clubhouse API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Clubhouse API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::{ActivityMap, DetailResponse, MessageResponse};
    use crate::registry::{Activity, ActivityRegistry};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let registry = Arc::new(ActivityRegistry::with_default_roster());
        let state = AppState::new(registry, ApiConfig::default());
        build_router(state)
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_get_activities() {
        let app = create_test_app();

        let response = app.oneshot(get_req("/activities")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let map: ActivityMap = body_json(response).await;
        assert!(map.get("Chess Club").is_some());
        // Server order is seed order
        assert_eq!(map.0[0].0, "Chess Club");
    }

    #[tokio::test]
    async fn test_signup_and_unregister_flow() {
        let app = create_test_app();
        let activity = "Math Olympiad";
        let email = "tester@example.com";
        let encoded = urlencoding::encode(activity);

        // Sign up
        let response = app
            .clone()
            .oneshot(post(&format!("/activities/{}/signup?email={}", encoded, email)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: MessageResponse = body_json(response).await;
        assert!(body.message.contains(email));

        // Participant is visible in the next fetch
        let response = app.clone().oneshot(get_req("/activities")).await.unwrap();
        let map: ActivityMap = body_json(response).await;
        assert!(map
            .get(activity)
            .unwrap()
            .participants
            .iter()
            .any(|p| p == email));

        // Duplicate signup fails with 400
        let response = app
            .clone()
            .oneshot(post(&format!("/activities/{}/signup?email={}", encoded, email)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: DetailResponse = body_json(response).await;
        assert!(!body.detail.is_empty());

        // Unregister
        let response = app
            .clone()
            .oneshot(post(&format!(
                "/activities/{}/unregister?email={}",
                encoded, email
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Gone from the roster
        let response = app.clone().oneshot(get_req("/activities")).await.unwrap();
        let map: ActivityMap = body_json(response).await;
        assert!(!map
            .get(activity)
            .unwrap()
            .participants
            .iter()
            .any(|p| p == email));

        // Unregistering someone not signed up returns 404
        let response = app
            .oneshot(post(&format!(
                "/activities/{}/unregister?email=notfound@example.com",
                encoded
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_signup_unknown_activity() {
        let app = create_test_app();

        let response = app
            .oneshot(post("/activities/Unknown%20Activity/signup?email=a@b.com"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: DetailResponse = body_json(response).await;
        assert_eq!(body.detail, "Activity not found");
    }

    #[tokio::test]
    async fn test_signup_full_activity() {
        let registry = Arc::new(ActivityRegistry::from_entries(vec![(
            "Tiny Club".to_string(),
            Activity::new("d", "Mon", 1).with_participants(&["only@x.com"]),
        )]));
        let state = AppState::new(registry, ApiConfig::default());
        let app = build_router(state);

        let response = app
            .oneshot(post("/activities/Tiny%20Club/signup?email=b@x.com"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_signup_missing_email() {
        let app = create_test_app();

        // The query extractor rejects a missing email parameter.
        let response = app
            .oneshot(post("/activities/Chess%20Club/signup"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_signup_blank_email_accepted() {
        let app = create_test_app();

        // An empty email value is taken as-is; there is no server-side
        // validation beyond the required parameter.
        let response = app
            .oneshot(post("/activities/Chess%20Club/signup?email="))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();

        let response = app.oneshot(get_req("/health/live")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let app = create_test_app();

        let response = app.oneshot(get_req("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: dto::HealthResponse = body_json(response).await;
        assert_eq!(body.status, "healthy");
        assert!(body.activities > 0);
    }
}
