use std::collections::BTreeSet;

use crate::prediction::classifier::RoleMatch;

/// Flattens role matches into one deduplicated keyword set: every matched term plus
/// every matched role name, lowercased and trimmed.
///
/// `BTreeSet` keeps iteration alphabetical so serialized keyword lists are stable.
pub fn aggregate(matches: &[RoleMatch]) -> BTreeSet<String> {
    let mut keywords = BTreeSet::new();
    for m in matches {
        for term in &m.matched_terms {
            keywords.insert(normalize(term));
        }
        keywords.insert(normalize(&m.role));
    }
    keywords.remove("");
    keywords
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
