//! Job search filters and pagination.
//!
//! A listing matches a filter when ANY of its terms occurs, case-insensitively, in ANY
//! of the searchable columns. Résumé keywords therefore widen the result set rather
//! than narrowing it.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::models::Job;

/// Columns a search term is matched against.
pub const SEARCH_COLUMNS: &[&str] = &["job_title", "description", "company_name", "job_location"];
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Comma-separated keywords, typically produced by résumé prediction.
    Keywords,
    /// A single free-text query.
    Query,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobFilter {
    pub terms: Vec<String>,
    pub search_type: SearchType,
}

impl JobFilter {
    /// Builds a filter from raw request parameters. Keywords win over `query`;
    /// returns `None` when neither carries a usable term.
    pub fn from_params(query: Option<&str>, keywords: Option<&str>) -> Option<Self> {
        let keyword_terms: Vec<String> = keywords
            .map(|k| {
                k.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        if !keyword_terms.is_empty() {
            return Some(JobFilter {
                terms: keyword_terms,
                search_type: SearchType::Keywords,
            });
        }

        let query = query.map(str::trim).filter(|q| !q.is_empty())?;
        Some(JobFilter {
            terms: vec![query.to_string()],
            search_type: SearchType::Query,
        })
    }

    /// LIKE patterns for each term, wildcards escaped so terms match literally.
    pub fn like_patterns(&self) -> Vec<String> {
        self.terms
            .iter()
            .map(|t| format!("%{}%", escape_like(t)))
            .collect()
    }
}

/// Escapes `%`, `_` and the escape character itself for a Postgres LIKE pattern.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    /// Validates paging parameters. Pages are 1-based; `limit` is capped at
    /// `MAX_PAGE_SIZE`.
    pub fn new(page: Option<i64>, limit: Option<i64>, default_limit: i64) -> Result<Self, AppError> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(default_limit);
        if page < 1 {
            return Err(AppError::Validation("page must be at least 1".to_string()));
        }
        if limit < 1 {
            return Err(AppError::Validation("limit must be at least 1".to_string()));
        }
        Ok(Pagination {
            page,
            limit: limit.min(MAX_PAGE_SIZE),
        })
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        (total + self.limit - 1) / self.limit
    }

    pub fn has_more(&self, total: i64) -> bool {
        self.page < self.total_pages(total)
    }
}

/// One page of matching listings plus the total match count.
#[derive(Debug, Clone)]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_split_and_trimmed() {
        let f = JobFilter::from_params(None, Some(" react , node.js,,  ")).unwrap();
        assert_eq!(f.search_type, SearchType::Keywords);
        assert_eq!(f.terms, vec!["react", "node.js"]);
    }

    #[test]
    fn test_keywords_take_precedence_over_query() {
        let f = JobFilter::from_params(Some("rust"), Some("python")).unwrap();
        assert_eq!(f.search_type, SearchType::Keywords);
        assert_eq!(f.terms, vec!["python"]);
    }

    #[test]
    fn test_query_used_when_no_keywords() {
        let f = JobFilter::from_params(Some("  data engineer "), None).unwrap();
        assert_eq!(f.search_type, SearchType::Query);
        assert_eq!(f.terms, vec!["data engineer"]);
    }

    #[test]
    fn test_blank_keywords_fall_back_to_query() {
        let f = JobFilter::from_params(Some("devops"), Some(" , ,")).unwrap();
        assert_eq!(f.search_type, SearchType::Query);
    }

    #[test]
    fn test_nothing_to_search_is_none() {
        assert!(JobFilter::from_params(None, None).is_none());
        assert!(JobFilter::from_params(Some("   "), Some("")).is_none());
    }

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("100%_remote\\"), "100\\%\\_remote\\\\");
        assert_eq!(escape_like("c++"), "c++");
    }

    #[test]
    fn test_like_patterns_wrap_terms() {
        let f = JobFilter::from_params(None, Some("ci/cd,50%")).unwrap();
        assert_eq!(f.like_patterns(), vec!["%ci/cd%", "%50\\%%"]);
    }

    #[test]
    fn test_pagination_defaults() {
        let p = Pagination::new(None, None, 50).unwrap();
        assert_eq!(p, Pagination { page: 1, limit: 50 });
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_pagination_offset_and_pages() {
        let p = Pagination::new(Some(3), Some(20), 50).unwrap();
        assert_eq!(p.offset(), 40);
        assert_eq!(p.total_pages(41), 3);
        assert_eq!(p.total_pages(40), 2);
        assert_eq!(p.total_pages(0), 0);
        assert!(!p.has_more(60));
        assert!(p.has_more(61));
    }

    #[test]
    fn test_pagination_caps_limit() {
        let p = Pagination::new(Some(1), Some(10_000), 50).unwrap();
        assert_eq!(p.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_pagination_rejects_zero() {
        assert!(matches!(
            Pagination::new(Some(0), None, 50),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            Pagination::new(None, Some(0), 50),
            Err(AppError::Validation(_))
        ));
    }
}
