//! Knowledge Store trait and implementations
//!
//! Abstracts the retrieval interface so different backends can be swapped:
//! - `VerificationStore`: precomputed query → snippet records from a JSON document
//! - `NoOpStore`: Returns empty results (augmentation disabled)

use crate::types::SearchResult;

/// Trait for knowledge store backends
///
/// Every implementation must be thread-safe (Send + Sync) since a host may
/// share one store across concurrent conversation handlers.
pub trait KnowledgeStore: Send + Sync {
    /// Up to `top_k` snippets for `query`, most relevant first
    fn search(&self, query: &str, top_k: usize) -> Vec<SearchResult>;

    /// Clarifying aspect recorded for `query`, or an empty string
    fn description(&self, query: &str) -> String;

    /// Whether backing data is currently available
    fn is_loaded(&self) -> bool;

    /// Get the store name for logging
    fn store_name(&self) -> &'static str;
}

/// NoOp knowledge store that returns empty results
///
/// Always reports loaded since "no knowledge" is a valid operational state.
pub struct NoOpStore;

impl KnowledgeStore for NoOpStore {
    fn search(&self, _query: &str, _top_k: usize) -> Vec<SearchResult> {
        Vec::new()
    }

    fn description(&self, _query: &str) -> String {
        String::new()
    }

    fn is_loaded(&self) -> bool {
        true
    }

    fn store_name(&self) -> &'static str {
        "NoOp"
    }
}
