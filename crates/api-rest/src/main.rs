//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! This binary is useful for development and debugging when you only want
//! the API (with OpenAPI/Swagger UI) without the workspace's main
//! `notedown-run` entry point.

use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{build_router, AppState};
use notedown_core::constants::{DEFAULT_DATA_DIR, DEFAULT_GRAMMAR_API_URL};
use notedown_core::CoreConfig;

/// Main entry point for the Notedown REST API server.
///
/// # Environment Variables
/// - `NOTEDOWN_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `NOTEDOWN_DATA_DIR`: Data directory (default: "notedown_data")
/// - `NOTEDOWN_GRAMMAR_URL`: Grammar-check endpoint
/// - `NOTEDOWN_REQUIRE_AUTH`: Set to "1" to gate note routes behind bearer tokens
/// - `NOTEDOWN_STATIC_DIR`: Frontend directory (default: "static")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the data directory cannot be created, or
/// - the server address cannot be bound.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("notedown_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("NOTEDOWN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting Notedown REST API on {}", addr);

    let data_dir =
        PathBuf::from(std::env::var("NOTEDOWN_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.into()));
    std::fs::create_dir_all(&data_dir)?;

    let grammar_url = std::env::var("NOTEDOWN_GRAMMAR_URL")
        .unwrap_or_else(|_| DEFAULT_GRAMMAR_API_URL.into());
    let require_auth = std::env::var("NOTEDOWN_REQUIRE_AUTH")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let static_dir =
        PathBuf::from(std::env::var("NOTEDOWN_STATIC_DIR").unwrap_or_else(|_| "static".into()));

    let cfg = Arc::new(CoreConfig::new(data_dir, grammar_url, require_auth)?);
    let state = AppState::new(cfg)?;

    let app = build_router(state, Some(&static_dir));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
