mod audit;
mod config;
mod errors;
mod images;
mod llm_client;
mod models;
mod render;
mod routes;
mod session;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::session::AuditSession;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Brand Audit API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the Gemini client
    let llm = GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_api_base.clone(),
        config.llm_timeout_secs.map(Duration::from_secs),
    )
    .context("failed to build the Gemini HTTP client")?;
    info!(
        "LLM client initialized (report model: {}, image model: {}, timeout: {})",
        llm_client::REPORT_MODEL,
        llm_client::IMAGE_MODEL,
        config
            .llm_timeout_secs
            .map_or_else(|| "none".to_string(), |secs| format!("{secs}s"))
    );
    if !config.enable_image_augmentation {
        info!("Placeholder image augmentation disabled");
    }

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        session: AuditSession::shared(),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client is hosted

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
