mod config;
mod errors;
mod heatmap;
mod identity;
mod models;
mod routes;
mod source;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::heatmap::palette::Palette;
use crate::routes::build_router;
use crate::source::{CandidateSource, HttpCandidateSource, MockCandidateSource};
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

    info!("Starting SkillMap API v{}", env!("CARGO_PKG_VERSION"));

    let source = build_source(&config)?;
    info!("Candidate source initialized ({})", source.backend());

    let state = AppState {
        config: config.clone(),
        source,
        palette: Palette::default(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Mock roster unless USE_MOCK_DATA is off; the mock roster also backs the
/// HTTP source as its fallback.
fn build_source(config: &Config) -> Result<Arc<dyn CandidateSource>> {
    let mock = MockCandidateSource::from_fixture()?;
    if config.use_mock_data {
        return Ok(Arc::new(mock));
    }

    info!("Using people backend at {}", config.people_api_url);
    let http = HttpCandidateSource::new(
        &config.people_api_url,
        Duration::from_secs(config.people_api_timeout_secs),
        mock,
    )?;
    Ok(Arc::new(http))
}
