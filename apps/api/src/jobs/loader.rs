//! JSONL job importer used by `jobboard load-jobs <file>`.
//!
//! Each line is one raw listing. Lines that fail to parse or lack a required field
//! are skipped and logged; the rest are trimmed and inserted in batches.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::jobs::models::NewJob;
use crate::jobs::store::JobStore;

pub const DEFAULT_JOBS_FILE: &str = "data/jobs.jsonl";
const BATCH_SIZE: usize = 100;
const DEFAULT_SOURCE: &str = "Unknown";

/// Listing as it appears in the source dump.
#[derive(Debug, Deserialize)]
struct RawJob {
    job_title: Option<String>,
    company_name: Option<String>,
    job_location: Option<String>,
    apply_link: Option<String>,
    job_description: Option<String>,
    source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub total_lines: usize,
    pub parsed: usize,
    pub skipped: usize,
    pub inserted: u64,
}

fn required(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

impl RawJob {
    fn into_new_job(self) -> Result<NewJob, Vec<&'static str>> {
        let fields = [
            ("job_title", required(&self.job_title)),
            ("company_name", required(&self.company_name)),
            ("job_location", required(&self.job_location)),
            ("apply_link", required(&self.apply_link)),
            ("job_description", required(&self.job_description)),
        ];
        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, v)| v.is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        let [title, company, location, link, description] = fields.map(|(_, v)| v.unwrap_or_default());
        Ok(NewJob {
            job_title: title,
            company_name: company,
            job_location: location,
            apply_link: link,
            description,
            source: required(&self.source).unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
        })
    }
}

/// Parses JSONL content into insertable listings. Blank lines are ignored.
pub fn parse_jsonl(content: &str) -> (Vec<NewJob>, LoadReport) {
    let mut jobs = Vec::new();
    let mut report = LoadReport::default();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        report.total_lines += 1;
        let line_no = idx + 1;

        let raw: RawJob = match serde_json::from_str(line) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(line = line_no, "Skipping unparseable job: {e}");
                report.skipped += 1;
                continue;
            }
        };

        match raw.into_new_job() {
            Ok(job) => jobs.push(job),
            Err(missing) => {
                warn!(line = line_no, ?missing, "Skipping job with missing fields");
                report.skipped += 1;
            }
        }
    }

    report.parsed = jobs.len();
    (jobs, report)
}

/// Replaces the job table contents with the listings in `path`.
pub async fn load_file(path: &Path, store: &dyn JobStore) -> Result<LoadReport> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read jobs file '{}'", path.display()))?;

    let (jobs, mut report) = parse_jsonl(&content);
    info!(
        "Parsed {} valid jobs from {} lines",
        report.parsed, report.total_lines
    );

    let cleared = store.clear().await?;
    info!("Cleared {cleared} existing jobs");

    for (batch_no, batch) in jobs.chunks(BATCH_SIZE).enumerate() {
        report.inserted += store.insert_batch(batch).await?;
        info!(
            "Inserted batch {} - Total: {}/{}",
            batch_no + 1,
            report.inserted,
            jobs.len()
        );
    }

    info!("Loaded {} jobs into the database", report.inserted);
    Ok(report)
}
