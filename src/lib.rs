//! # Clubhouse
//!
//! A small full-stack activity signup board: an in-memory activity roster
//! behind an Axum REST API, with a Leptos WASM frontend (see
//! `clubhouse-ui/`) that renders the board and submits signups.
//!
//! ## Modules
//!
//! - [`registry`]: In-memory activity roster and its mutation rules
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML/environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clubhouse::api::{serve, ApiConfig, AppState};
//! use clubhouse::registry::ActivityRegistry;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = Arc::new(ActivityRegistry::with_default_roster());
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(registry, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod registry;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiConfig, ApiError, ApiResult, AppState};
pub use config::{Config, ConfigError};
pub use registry::{Activity, ActivityRegistry, RegistryError, RegistryResult};
