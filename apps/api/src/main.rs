mod analysis;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod roles;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::roles::RoleCatalog;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AIRAS API v{}", env!("CARGO_PKG_VERSION"));

    // Fail fast on a missing or malformed credential, before anything is served
    let llm = LlmClient::new(
        &config.google_api_key,
        Duration::from_secs(config.llm_timeout_secs),
    )
    .context("Failed to initialize the Gemini client")?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let roles = match &config.role_profiles_path {
        Some(path) => RoleCatalog::from_path(path)?,
        None => RoleCatalog::builtin()?,
    };
    info!("Role catalog loaded: {} roles", roles.roles().len());

    let state = AppState {
        llm: Arc::new(llm),
        roles: Arc::new(roles),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web front end has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
