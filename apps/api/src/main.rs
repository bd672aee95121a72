mod analysis;
mod config;
mod courses;
mod cover_letter;
mod errors;
mod jobs;
mod llm_client;
mod research;
mod resume;
mod routes;
mod search_client;
mod state;
mod video_client;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::resume::session::SessionStore;
use crate::routes::build_router;
use crate::search_client::SerpClient;
use crate::state::AppState;
use crate::video_client::YoutubeClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobscout API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize upstream clients
    let llm = LlmClient::new(&config).context("Failed to build LLM client")?;
    info!("LLM client initialized (model: {})", llm.model());

    let search = SerpClient::new(&config).context("Failed to build search client")?;
    let videos = YoutubeClient::new(&config).context("Failed to build video client")?;
    info!("Search and video clients initialized");

    let sessions = SessionStore::new(chrono::Duration::minutes(config.session_ttl_minutes));
    info!("Session TTL: {} minutes", config.session_ttl_minutes);

    // Build app state
    let state = AppState {
        config: config.clone(),
        llm: Arc::new(llm),
        search: Arc::new(search),
        videos: Arc::new(videos),
        sessions,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
