//! Job listing storage.
//!
//! `JobStore` is carried in `AppState` as `Arc<dyn JobStore>`. `PgJobStore` is the
//! production backend; tests use the in-memory store below.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use crate::errors::AppError;
use crate::jobs::models::{Job, NewJob};
use crate::jobs::search::{JobFilter, JobPage, Pagination, SEARCH_COLUMNS};

#[async_trait]
pub trait JobStore: Send + Sync {
    /// Listings matching `filter`, newest first, one page at a time.
    async fn search(&self, filter: &JobFilter, page: &Pagination) -> Result<JobPage, AppError>;

    /// Inserts listings, returning how many rows were written.
    async fn insert_batch(&self, jobs: &[NewJob]) -> Result<u64, AppError>;

    /// Removes every listing, returning how many rows were deleted.
    async fn clear(&self) -> Result<u64, AppError>;
}

pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Appends `WHERE (col ILIKE $n OR ...) OR (...)`, one group per term.
fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &JobFilter) {
    qb.push(" WHERE ");
    for (i, pattern) in filter.like_patterns().into_iter().enumerate() {
        if i > 0 {
            qb.push(" OR ");
        }
        qb.push("(");
        for (j, column) in SEARCH_COLUMNS.iter().enumerate() {
            if j > 0 {
                qb.push(" OR ");
            }
            qb.push(*column).push(" ILIKE ").push_bind(pattern.clone());
        }
        qb.push(")");
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn search(&self, filter: &JobFilter, page: &Pagination) -> Result<JobPage, AppError> {
        let mut count_qb = QueryBuilder::new("SELECT COUNT(*) FROM jobs");
        push_filter(&mut count_qb, filter);
        let (total,): (i64,) = count_qb.build_query_as().fetch_one(&self.pool).await?;

        let mut qb = QueryBuilder::new("SELECT * FROM jobs");
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(page.limit)
            .push(" OFFSET ")
            .push_bind(page.offset());
        let jobs: Vec<Job> = qb.build_query_as().fetch_all(&self.pool).await?;

        debug!(
            terms = filter.terms.len(),
            total,
            returned = jobs.len(),
            "Job search executed"
        );
        Ok(JobPage { jobs, total })
    }

    async fn insert_batch(&self, jobs: &[NewJob]) -> Result<u64, AppError> {
        if jobs.is_empty() {
            return Ok(0);
        }
        let mut qb = QueryBuilder::new(
            "INSERT INTO jobs (job_title, company_name, job_location, apply_link, description, source) ",
        );
        qb.push_values(jobs, |mut row, job| {
            row.push_bind(job.job_title.clone())
                .push_bind(job.company_name.clone())
                .push_bind(job.job_location.clone())
                .push_bind(job.apply_link.clone())
                .push_bind(job.description.clone())
                .push_bind(job.source.clone());
        });
        let result = qb.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn clear(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM jobs").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
