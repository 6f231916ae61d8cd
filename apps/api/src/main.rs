mod config;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod routes;
mod screening;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{Mutex, RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::oracle::{Extractor, LlmExtractor};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::screening::storage::ResultStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_name, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting screener API v{}", env!("CARGO_PKG_VERSION"));

    // Result persistence (creates the output directory if needed)
    let store = ResultStore::new(&config.output_dir)?;

    // Restore the job analysis from a previous run, if one was persisted
    let job = store.load_job()?;
    match &job {
        Some(j) => info!("Restored persisted job analysis: {}", j.title),
        None => info!("No persisted job analysis; waiting for POST /api/v1/job"),
    }

    // Extraction oracle backed by the LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    let extractor: Arc<dyn Extractor> = Arc::new(LlmExtractor::new(llm));
    info!("Extraction oracle initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        config: config.clone(),
        extractor,
        store: Arc::new(Mutex::new(store)),
        job: Arc::new(RwLock::new(job)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
