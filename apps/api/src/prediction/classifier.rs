//! Role classifier — weighted lexical scoring of free text against the role taxonomy.
//!
//! Algorithm, per role:
//! 1. every primary term found as a substring of the lowercased text counts 1
//! 2. every secondary term found counts 0.5
//! 3. score = (primary × 3 + secondary) × weight
//! 4. roles scoring ≤ 0.5 are dropped
//!
//! Results are sorted by score descending. Equal scores keep taxonomy declaration
//! order. Overlapping terms ("react" / "react developer") each count on their own.

use serde::{Deserialize, Serialize};

use crate::prediction::taxonomy::{RoleDefinition, RoleTaxonomy};

const PRIMARY_TERM_POINTS: f64 = 3.0;
const SECONDARY_TERM_POINTS: f64 = 0.5;
/// Scores must be strictly greater than this to be reported.
pub const MIN_REPORTED_SCORE: f64 = 0.5;

/// One role's score and the evidence behind it for a given text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMatch {
    pub role: String,
    pub score: f64,
    /// Terms as declared in the taxonomy, primary terms first.
    pub matched_terms: Vec<String>,
}

/// Scores `text` against every role in `taxonomy` and returns the qualifying roles,
/// best first. Never fails; empty text yields an empty list.
pub fn classify(text: &str, taxonomy: &RoleTaxonomy) -> Vec<RoleMatch> {
    let lower = text.to_lowercase();

    let mut matches: Vec<RoleMatch> = taxonomy
        .iter()
        .filter_map(|role| score_role(&lower, role))
        .collect();

    // Stable sort: ties stay in declaration order.
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}

fn score_role(lower_text: &str, role: &RoleDefinition) -> Option<RoleMatch> {
    let mut matched_terms = Vec::new();
    let mut primary_hits = 0.0_f64;
    let mut secondary_hits = 0.0_f64;

    for term in role.primary_terms {
        if lower_text.contains(&term.to_lowercase()) {
            primary_hits += 1.0;
            matched_terms.push(term.to_string());
        }
    }

    for term in role.secondary_terms {
        if lower_text.contains(&term.to_lowercase()) {
            secondary_hits += SECONDARY_TERM_POINTS;
            matched_terms.push(term.to_string());
        }
    }

    let score = (primary_hits * PRIMARY_TERM_POINTS + secondary_hits) * role.weight;
    (score > MIN_REPORTED_SCORE).then(|| RoleMatch {
        role: role.name.to_string(),
        score,
        matched_terms,
    })
}
