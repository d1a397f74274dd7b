mod analysis;
mod config;
mod errors;
mod models;
mod profile;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::KeywordAnalyzer;
use crate::analysis::session::AnalysisSession;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PinPoint API v{}", env!("CARGO_PKG_VERSION"));

    // Keyword analyzer by default; any ResumeAnalyzer can be swapped in here
    let analysis = Arc::new(AnalysisSession::new(
        Arc::new(KeywordAnalyzer),
        config.analysis_delay,
    ));
    info!(
        "Analysis session initialized (pacing delay {}ms)",
        config.analysis_delay.as_millis()
    );

    let state = AppState {
        config: config.clone(),
        analysis,
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
