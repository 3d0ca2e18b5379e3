//! Clubhouse API Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! A `config.toml` is read from the usual locations; environment variables
//! override it:
//! - `CLUBHOUSE_HOST`: Host to bind to (default: 0.0.0.0)
//! - `CLUBHOUSE_PORT`: Port to listen on (default: 8088)
//! - `CLUBHOUSE_STATIC_DIR`: Directory with built frontend assets (optional)
//! - `CLUBHOUSE_LOG_LEVEL` / `RUST_LOG`: Log level (default: info)

use clubhouse::api::{serve, ApiConfig, AppState};
use clubhouse::config::Config;
use clubhouse::registry::ActivityRegistry;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("clubhouse={},tower_http=debug", config.logging.level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Clubhouse API server v{}", env!("CARGO_PKG_VERSION"));

    let registry = Arc::new(ActivityRegistry::with_default_roster());
    tracing::info!("Seeded roster with {} activities", registry.len().await);

    let api_config = ApiConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        static_dir: config.server.static_dir.clone(),
    };

    if let Some(dir) = &api_config.static_dir {
        tracing::info!("Serving frontend assets from {}", dir);
    }

    let state = AppState::new(registry, api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Clubhouse API server stopped");
    Ok(())
}
