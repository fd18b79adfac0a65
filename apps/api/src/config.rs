use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Largest résumé upload accepted by `/api/predict`.
    pub max_upload_bytes: usize,
    /// Default page size for `/api/jobs` when the client sends no `limit`.
    pub jobs_page_size: i64,
    /// Number of keywords returned by `GET /api/keywords`.
    pub trending_limit: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            jobs_page_size: env_or("JOBS_PAGE_SIZE", 50)?,
            trending_limit: env_or("TRENDING_LIMIT", 10)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or<T: FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| anyhow::anyhow!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
