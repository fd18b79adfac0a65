pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs::handlers::handle_search_jobs;
use crate::keywords::handlers::{handle_track_keywords, handle_trending_keywords};
use crate::prediction::handlers::handle_predict;
use crate::state::AppState;

/// Headroom above the file size limit for multipart boundaries and headers.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/predict",
            post(handle_predict).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/jobs", get(handle_search_jobs))
        .route(
            "/api/keywords",
            get(handle_trending_keywords).post(handle_track_keywords),
        )
        .with_state(state)
}
