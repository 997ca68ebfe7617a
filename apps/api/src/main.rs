mod config;
mod errors;
mod extraction;
mod llm_client;
mod routes;
mod screening;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::ExtractionPool;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing GEMINI_KEY before anything binds)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume screener v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_api_base.clone(),
        config.gemini_model.clone(),
    )
    .context("Failed to build LLM HTTP client")?;
    info!("LLM client initialized (model: {})", config.gemini_model);

    // Blocking pool for PDF extraction
    let extraction = ExtractionPool::new(config.extraction_workers);
    info!("Extraction pool initialized ({} workers)", extraction.workers());

    let state = AppState {
        llm: Arc::new(llm),
        extraction,
        config: config.clone(),
    };

    let app = build_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
