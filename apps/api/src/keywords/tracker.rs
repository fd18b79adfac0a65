//! Search-term popularity counter backing the "trending keywords" list.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TrackedKeyword {
    pub term: String,
    pub count: i64,
}

/// Lowercases and trims a term; `None` when nothing is left.
pub fn normalize_term(term: &str) -> Option<String> {
    let term = term.trim().to_lowercase();
    (!term.is_empty()).then_some(term)
}

#[async_trait]
pub trait KeywordTracker: Send + Sync {
    /// Adds one to the term's count, creating it at 1. `term` is already normalized.
    async fn increment(&self, term: &str) -> Result<TrackedKeyword, AppError>;

    /// Most-searched terms, highest count first, ties alphabetical.
    async fn trending(&self, limit: i64) -> Result<Vec<TrackedKeyword>, AppError>;
}

pub struct PgKeywordTracker {
    pool: PgPool,
}

impl PgKeywordTracker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeywordTracker for PgKeywordTracker {
    async fn increment(&self, term: &str) -> Result<TrackedKeyword, AppError> {
        let keyword = sqlx::query_as::<_, TrackedKeyword>(
            r#"
            INSERT INTO keywords (term, count) VALUES ($1, 1)
            ON CONFLICT (term) DO UPDATE SET count = keywords.count + 1
            RETURNING term, count
            "#,
        )
        .bind(term)
        .fetch_one(&self.pool)
        .await?;
        Ok(keyword)
    }

    async fn trending(&self, limit: i64) -> Result<Vec<TrackedKeyword>, AppError> {
        let keywords = sqlx::query_as::<_, TrackedKeyword>(
            "SELECT term, count FROM keywords ORDER BY count DESC, term ASC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(keywords)
    }
}

#[cfg(test)]
pub mod memory {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct InMemoryKeywordTracker {
        counts: Mutex<HashMap<String, i64>>,
    }

    impl InMemoryKeywordTracker {
        pub fn count(&self, term: &str) -> Option<i64> {
            self.counts.lock().unwrap().get(term).copied()
        }
    }

    #[async_trait]
    impl KeywordTracker for InMemoryKeywordTracker {
        async fn increment(&self, term: &str) -> Result<TrackedKeyword, AppError> {
            let mut counts = self.counts.lock().unwrap();
            let count = counts.entry(term.to_string()).or_insert(0);
            *count += 1;
            Ok(TrackedKeyword {
                term: term.to_string(),
                count: *count,
            })
        }

        async fn trending(&self, limit: i64) -> Result<Vec<TrackedKeyword>, AppError> {
            let mut all: Vec<TrackedKeyword> = self
                .counts
                .lock()
                .unwrap()
                .iter()
                .map(|(term, count)| TrackedKeyword {
                    term: term.clone(),
                    count: *count,
                })
                .collect();
            all.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
            all.truncate(limit.max(0) as usize);
            Ok(all)
        }
    }
}
