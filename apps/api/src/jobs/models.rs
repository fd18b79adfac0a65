use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub job_location: String,
    pub apply_link: String,
    pub description: String,
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A listing ready for insertion; ids and timestamps are assigned by the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJob {
    pub job_title: String,
    pub company_name: String,
    pub job_location: String,
    pub apply_link: String,
    pub description: String,
    pub source: String,
}
