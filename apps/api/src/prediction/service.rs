//! Prediction pipeline: résumé text → ranked roles + search keywords.

use serde::{Deserialize, Serialize};

use crate::prediction::classifier::{classify, RoleMatch};
use crate::prediction::keywords::aggregate;
use crate::prediction::taxonomy::ROLE_TAXONOMY;

/// Role reported when nothing in the text matches the taxonomy.
pub const FALLBACK_ROLE: &str = "Software Engineer";
pub const TOP_SUGGESTIONS: usize = 5;
const PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub primary_role: String,
    pub all_matches: Vec<RoleMatch>,
    pub top_suggestions: Vec<RoleMatch>,
    /// Alphabetical.
    pub keywords: Vec<String>,
    pub success: bool,
    pub debug: PredictionDebug,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionDebug {
    pub text_length: usize,
    pub preview: String,
    pub total_matches: usize,
    pub total_keywords: usize,
}

pub fn predict(text: &str) -> Prediction {
    let all_matches = classify(text, ROLE_TAXONOMY);
    let keywords: Vec<String> = aggregate(&all_matches).into_iter().collect();

    let primary_role = all_matches
        .first()
        .map(|m| m.role.clone())
        .unwrap_or_else(|| FALLBACK_ROLE.to_string());
    let top_suggestions = all_matches.iter().take(TOP_SUGGESTIONS).cloned().collect();

    let debug = PredictionDebug {
        text_length: text.chars().count(),
        preview: text.chars().take(PREVIEW_CHARS).collect(),
        total_matches: all_matches.len(),
        total_keywords: keywords.len(),
    };

    Prediction {
        primary_role,
        all_matches,
        top_suggestions,
        keywords,
        success: true,
        debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROAD_RESUME: &str = "Full stack software engineer. React, TypeScript, Node.js, \
        Express, GraphQL. Python data pipeline with Spark and Airflow. Docker, Kubernetes, \
        AWS, Terraform, CI/CD. Tech lead: mentoring and code review. Agile, scrum.";

    #[test]
    fn test_no_matches_falls_back_to_software_engineer() {
        let p = predict("");
        assert_eq!(p.primary_role, FALLBACK_ROLE);
        assert!(p.all_matches.is_empty());
        assert!(p.top_suggestions.is_empty());
        assert!(p.keywords.is_empty());
        assert!(p.success);
    }

    #[test]
    fn test_primary_role_is_top_match() {
        let p = predict("Experienced backend developer skilled in node.js and express.");
        assert_eq!(p.primary_role, "Backend Developer");
        assert_eq!(p.all_matches[0].role, p.primary_role);
    }

    #[test]
    fn test_top_suggestions_capped_at_five() {
        let p = predict(BROAD_RESUME);
        assert!(p.all_matches.len() > TOP_SUGGESTIONS);
        assert_eq!(p.top_suggestions.len(), TOP_SUGGESTIONS);
        assert_eq!(p.top_suggestions[..], p.all_matches[..TOP_SUGGESTIONS]);
    }

    #[test]
    fn test_keywords_sorted_and_counted() {
        let p = predict(BROAD_RESUME);
        let mut sorted = p.keywords.clone();
        sorted.sort();
        assert_eq!(p.keywords, sorted);
        assert_eq!(p.debug.total_keywords, p.keywords.len());
        assert_eq!(p.debug.total_matches, p.all_matches.len());
    }

    #[test]
    fn test_preview_truncated_on_char_boundary() {
        let text = "é".repeat(300);
        let p = predict(&text);
        assert_eq!(p.debug.preview.chars().count(), 200);
        assert_eq!(p.debug.text_length, 300);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(predict("devops engineer")).unwrap();
        assert_eq!(json["primaryRole"], "DevOps Engineer");
        assert!(json["topSuggestions"].is_array());
        assert!(json["debug"]["totalMatches"].is_number());
    }
}
