//! Axum route handlers for keyword tracking.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::keywords::tracker::{normalize_term, TrackedKeyword};
use crate::state::AppState;

/// Either a single searched `term` or the `keywords` list from a résumé prediction.
#[derive(Debug, Default, Deserialize)]
pub struct TrackKeywordsRequest {
    pub term: Option<String>,
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrackKeywordsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<TrackedKeyword>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<TrackedKeyword>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrendingResponse {
    pub keywords: Vec<TrackedKeyword>,
}

/// POST /api/keywords
pub async fn handle_track_keywords(
    State(state): State<AppState>,
    Json(req): Json<TrackKeywordsRequest>,
) -> Result<Json<TrackKeywordsResponse>, AppError> {
    if let Some(term) = req.term.as_deref().and_then(normalize_term) {
        let keyword = state.keyword_tracker.increment(&term).await?;
        return Ok(Json(TrackKeywordsResponse {
            success: true,
            keyword: Some(keyword),
            keywords: None,
        }));
    }

    if let Some(keywords) = req.keywords {
        let mut tracked = Vec::with_capacity(keywords.len());
        for term in keywords.iter().filter_map(|k| normalize_term(k)) {
            tracked.push(state.keyword_tracker.increment(&term).await?);
        }
        info!(tracked = tracked.len(), "Tracked résumé keywords");
        return Ok(Json(TrackKeywordsResponse {
            success: true,
            keyword: None,
            keywords: Some(tracked),
        }));
    }

    Err(AppError::Validation(
        "Invalid keyword term or keywords array".to_string(),
    ))
}

/// GET /api/keywords
pub async fn handle_trending_keywords(
    State(state): State<AppState>,
) -> Result<Json<TrendingResponse>, AppError> {
    let keywords = state
        .keyword_tracker
        .trending(state.config.trending_limit)
        .await?;
    Ok(Json(TrendingResponse { keywords }))
}
