mod config;
mod db;
mod errors;
mod jobs;
mod keywords;
mod prediction;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::jobs::loader::{load_file, DEFAULT_JOBS_FILE};
use crate::jobs::store::PgJobStore;
use crate::keywords::tracker::PgKeywordTracker;
use crate::prediction::extract::PdfTextExtractor;
use crate::prediction::taxonomy::ROLE_TAXONOMY;
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

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("serve") => serve(config).await,
        Some("load-jobs") => {
            let path = args
                .get(1)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_JOBS_FILE));
            load_jobs(config, path).await
        }
        Some(other) => bail!("Unknown command '{other}'. Usage: jobboard [serve | load-jobs [FILE]]"),
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting Job Board API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    info!("Role taxonomy loaded ({} roles)", ROLE_TAXONOMY.len());

    let state = AppState {
        config: config.clone(),
        jobs: Arc::new(PgJobStore::new(db.clone())),
        keyword_tracker: Arc::new(PgKeywordTracker::new(db)),
        text_extractor: Arc::new(PdfTextExtractor),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Replaces all job listings with the contents of a JSONL dump.
async fn load_jobs(config: Config, path: PathBuf) -> Result<()> {
    info!("Loading jobs from {}", path.display());

    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    let store = PgJobStore::new(db);
    let report = load_file(&path, &store).await?;
    info!(
        inserted = report.inserted,
        skipped = report.skipped,
        "Job import finished"
    );
    Ok(())
}
