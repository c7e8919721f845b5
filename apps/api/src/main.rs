mod archive;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::archive::store::ArchiveStore;
use crate::config::Config;
use crate::extraction::extractor::OllamaExtractor;
use crate::llm_client::OllamaClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Parsume API v{}", env!("CARGO_PKG_VERSION"));

    let archive = ArchiveStore::new(&config.storage_dir)?;
    info!("Archive store ready at {}", config.storage_dir);

    let llm = OllamaClient::new(config.ollama_url.clone(), config.ollama_model.clone());
    info!("LLM client initialized (model: {})", llm.model());

    let extractor = Arc::new(OllamaExtractor::new(llm));

    let state = AppState { archive, extractor };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config.allowed_origins)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS restricted to the configured dev origins; all methods and headers are
/// allowed from those origins.
fn build_cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid origin '{origin}' in ALLOWED_ORIGINS"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}
