//! Query normalization and token-overlap scoring
//!
//! Exact lookups key on the normalized query string. When no key matches,
//! candidates are ranked by the share of distinct tokens they have in common
//! with the query, relative to the larger of the two token sets.

use std::collections::HashSet;

/// Minimum overlap score (exclusive) for a fuzzy match to be accepted
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.3;

/// Lowercase and trim surrounding whitespace. Internal whitespace is kept as-is.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Distinct lowercase tokens of `text`, split on whitespace runs.
///
/// Single-character tokens are dropped.
pub fn query_tokens(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Overlap score in `[0, 1]`: shared tokens over the larger set size (floor 1)
#[allow(clippy::cast_precision_loss)]
pub fn overlap_score(query: &HashSet<String>, candidate: &HashSet<String>) -> f64 {
    let overlap = query.intersection(candidate).count();
    let denominator = query.len().max(candidate.len()).max(1);
    overlap as f64 / denominator as f64
}
