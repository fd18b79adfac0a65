use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Schema statements, run one at a time (prepared statements cannot batch).
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS jobs (
        id           UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        job_title    TEXT NOT NULL,
        company_name TEXT NOT NULL,
        job_location TEXT NOT NULL,
        apply_link   TEXT NOT NULL,
        description  TEXT NOT NULL,
        source       TEXT,
        created_at   TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at   TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS jobs_job_title_idx ON jobs (job_title)",
    "CREATE INDEX IF NOT EXISTS jobs_company_name_idx ON jobs (company_name)",
    "CREATE INDEX IF NOT EXISTS jobs_job_location_idx ON jobs (job_location)",
    "CREATE INDEX IF NOT EXISTS jobs_created_at_idx ON jobs (created_at DESC)",
    r#"
    CREATE TABLE IF NOT EXISTS keywords (
        term  TEXT PRIMARY KEY,
        count BIGINT NOT NULL DEFAULT 1
    )
    "#,
    "CREATE INDEX IF NOT EXISTS keywords_count_idx ON keywords (count DESC)",
];

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the `jobs` and `keywords` tables and their indexes if missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database schema ready");
    Ok(())
}
