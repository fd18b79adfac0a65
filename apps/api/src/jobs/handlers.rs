//! Axum route handlers for job search.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::jobs::models::Job;
use crate::jobs::search::{JobFilter, Pagination, SearchType};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct JobSearchParams {
    pub query: Option<String>,
    /// Comma-separated keyword list.
    pub keywords: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchResponse {
    pub jobs: Vec<Job>,
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_type: Option<SearchType>,
    pub keywords_used: usize,
}

/// GET /api/jobs
///
/// Matches listings against either a free-text `query` or a `keywords` list (OR'd),
/// newest first.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobSearchParams>,
) -> Result<Json<JobSearchResponse>, AppError> {
    let page = Pagination::new(params.page, params.limit, state.config.jobs_page_size)?;

    let Some(filter) = JobFilter::from_params(params.query.as_deref(), params.keywords.as_deref())
    else {
        return Ok(Json(JobSearchResponse {
            jobs: vec![],
            total: 0,
            page: page.page,
            total_pages: 0,
            has_more: false,
            search_type: None,
            keywords_used: 0,
        }));
    };

    let result = state.jobs.search(&filter, &page).await?;
    info!(
        search_type = ?filter.search_type,
        terms = filter.terms.len(),
        total = result.total,
        "Job search"
    );

    let keywords_used = match filter.search_type {
        SearchType::Keywords => filter.terms.len(),
        SearchType::Query => 0,
    };

    Ok(Json(JobSearchResponse {
        total_pages: page.total_pages(result.total),
        has_more: page.has_more(result.total),
        jobs: result.jobs,
        total: result.total,
        page: page.page,
        search_type: Some(filter.search_type),
        keywords_used,
    }))
}
