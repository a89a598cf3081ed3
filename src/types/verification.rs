//! Verification records: canonical queries paired with precomputed snippets

use serde::{Deserialize, Serialize};

/// One retrieved snippet with its citation metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// 1-based rank assigned by the offline producer
    pub rank: u32,
    /// Human-readable citation, e.g. "Chapter 2, p. 14"
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_num: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_id: Option<String>,
    /// Source-provided relevance
    #[serde(default)]
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_preview: Option<String>,
    /// Verbatim text injected into the prompt
    pub full_content: String,
}

/// A canonical query and its pre-ranked supporting snippets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationEntry {
    pub query: String,
    /// Clarifying aspect of the query; empty when the record has none
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Rank ascending, most relevant first
    #[serde(default)]
    pub search_results: Vec<SearchResult>,
}
