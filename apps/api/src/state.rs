use std::sync::Arc;

use crate::config::Config;
use crate::jobs::store::JobStore;
use crate::keywords::tracker::KeywordTracker;
use crate::prediction::extract::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Job listing search backend. Default: PgJobStore.
    pub jobs: Arc<dyn JobStore>,
    /// Search-term popularity counter. Default: PgKeywordTracker.
    pub keyword_tracker: Arc<dyn KeywordTracker>,
    /// Résumé text extraction. Default: PdfTextExtractor.
    pub text_extractor: Arc<dyn TextExtractor>,
}

#[cfg(test)]
impl AppState {
    /// State backed by empty in-memory stores and the real PDF extractor.
    pub fn for_tests() -> Self {
        use crate::jobs::store::memory::InMemoryJobStore;
        use crate::keywords::tracker::memory::InMemoryKeywordTracker;
        use crate::prediction::extract::PdfTextExtractor;

        AppState {
            config: Config {
                database_url: "postgres://localhost/jobboard_test".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
                max_upload_bytes: 4096,
                jobs_page_size: 50,
                trending_limit: 10,
            },
            jobs: Arc::new(InMemoryJobStore::default()),
            keyword_tracker: Arc::new(InMemoryKeywordTracker::default()),
            text_extractor: Arc::new(PdfTextExtractor),
        }
    }
}
