mod config;
mod document;
mod errors;
mod llm_client;
mod models;
mod review;
mod routes;
mod state;

#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::document::{DocumentReader, DriveFetcher, PdfExtractText};
use crate::llm_client::{GeminiClient, LlmClient};
use crate::routes::{build_router, cors_layer};
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

    info!("Starting resume review API v{}", env!("CARGO_PKG_VERSION"));

    // One HTTP connection pool shared by the file store and the completion API.
    // Per-call timeouts are applied by DocumentReader and LlmClient.
    let http = reqwest::Client::builder()
        .build()
        .context("Failed to build HTTP client")?;

    let documents = DocumentReader::new(
        Arc::new(DriveFetcher::new(http.clone(), config.drive_base_url.clone())),
        Arc::new(PdfExtractText),
        config.fetch_timeout,
    );

    let gemini = GeminiClient::new(
        http,
        config.google_api_key.clone(),
        config.llm_base_url.clone(),
    );
    let llm = LlmClient::new(
        Arc::new(gemini),
        config.generation_settings(),
        config.llm_timeout,
    );
    let settings = llm.settings();
    info!(
        "LLM client initialized (model: {}, temperature: {}, max_output_tokens: {})",
        settings.model, settings.temperature, settings.max_output_tokens
    );

    let state = AppState { documents, llm };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
