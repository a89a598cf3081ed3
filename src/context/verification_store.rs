//! Verification Store - precomputed query → snippet lookup
//!
//! Backed by a JSON array of `VerificationEntry` records produced offline.
//! The document is read lazily on first use and kept for the lifetime of the
//! store. Lookups try an exact match on the normalized query first, then fall
//! back to token-overlap scoring across every record in document order.
//!
//! A missing or malformed document is not an error for callers: the store
//! stays unloaded, searches return nothing, and the next lookup tries again.

use crate::context::knowledge_store::KnowledgeStore;
use crate::context::matching::{normalize_query, overlap_score, query_tokens, FUZZY_MATCH_THRESHOLD};
use crate::types::{SearchResult, VerificationEntry};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Load lifecycle of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No load attempted yet
    #[default]
    Unloaded,
    /// Records are in memory; further loads are no-ops
    Loaded,
    /// Last attempt failed (missing or malformed document); retried on next use
    Failed,
}

/// Reasons a load attempt can fail
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("verification data not found at {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] serde_json::Error),
}

#[derive(Default)]
struct Records {
    state: LoadState,
    entries: Vec<VerificationEntry>,
    /// Token set of each entry's query, parallel to `entries`
    tokens: Vec<HashSet<String>>,
    /// Normalized query → position in `entries` (last duplicate wins)
    index: HashMap<String, usize>,
}

impl Records {
    fn install(&mut self, entries: Vec<VerificationEntry>) {
        self.index.clear();
        for (pos, entry) in entries.iter().enumerate() {
            self.index.insert(normalize_query(&entry.query), pos);
        }
        self.tokens = entries.iter().map(|e| query_tokens(&e.query)).collect();
        self.entries = entries;
        self.state = LoadState::Loaded;
    }

    fn exact(&self, normalized: &str) -> Option<&VerificationEntry> {
        self.index
            .get(normalized)
            .and_then(|&pos| self.entries.get(pos))
    }

    /// Best entry by overlap score; earlier entries win ties
    fn best_fuzzy(&self, normalized: &str) -> Option<(&VerificationEntry, f64)> {
        let wanted = query_tokens(normalized);
        let mut best: Option<(&VerificationEntry, f64)> = None;
        let mut best_score = 0.0;

        for (entry, tokens) in self.entries.iter().zip(&self.tokens) {
            let score = overlap_score(&wanted, tokens);
            if score > best_score {
                best_score = score;
                best = Some((entry, score));
            }
        }

        best
    }
}

/// Knowledge store over a precomputed verification document
pub struct VerificationStore {
    path: PathBuf,
    records: RwLock<Records>,
}

impl VerificationStore {
    /// Create an unloaded store reading from `path` on first use
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: RwLock::new(Records::default()),
        }
    }

    /// Create a store that is already loaded with `entries`
    pub fn from_entries(entries: Vec<VerificationEntry>) -> Self {
        let mut records = Records::default();
        records.install(entries);
        Self {
            path: PathBuf::new(),
            records: RwLock::new(records),
        }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the backing document if it is not loaded yet.
    ///
    /// Holds the write lock for the whole attempt, so concurrent first
    /// callers read the file once. Returns the resulting state.
    pub fn load(&self) -> LoadState {
        let mut records = self.write();
        if records.state == LoadState::Loaded {
            return LoadState::Loaded;
        }

        match read_entries(&self.path) {
            Ok(entries) => {
                records.install(entries);
                info!(
                    path = %self.path.display(),
                    count = records.entries.len(),
                    "Loaded verification entries"
                );
            }
            Err(LoadError::Missing(path)) => {
                warn!(path = %path.display(), "Verification data not found");
                records.state = LoadState::Failed;
            }
            Err(e) => {
                error!(error = %e, "Failed to load verification data");
                records.state = LoadState::Failed;
            }
        }

        records.state
    }

    /// Current load state, without attempting a load
    pub fn load_state(&self) -> LoadState {
        self.read().state
    }

    /// Whether records are in memory, without attempting a load
    pub fn is_loaded(&self) -> bool {
        self.load_state() == LoadState::Loaded
    }

    /// Number of records held (zero unless loaded)
    pub fn entry_count(&self) -> usize {
        self.read().entries.len()
    }

    /// Up to `top_k` snippets for `query`, in their stored rank order.
    ///
    /// Exact normalized match first; otherwise the best token-overlap entry
    /// if its score exceeds [`FUZZY_MATCH_THRESHOLD`].
    pub fn search(&self, query: &str, top_k: usize) -> Vec<SearchResult> {
        let records = self.loaded_records();
        let normalized = normalize_query(query);

        if let Some(entry) = records.exact(&normalized) {
            info!(query = %query, "Exact match found");
            return first_results(entry, top_k);
        }

        match records.best_fuzzy(&normalized) {
            Some((entry, score)) if score > FUZZY_MATCH_THRESHOLD => {
                info!(
                    query = %query,
                    matched = %entry.query,
                    score = %format_args!("{score:.2}"),
                    "Fuzzy match found"
                );
                first_results(entry, top_k)
            }
            best => {
                debug!(best_score = best.map_or(0.0, |(_, s)| s), "Fuzzy match below threshold");
                info!(query = %query, "No matching verification data");
                Vec::new()
            }
        }
    }

    /// Description of the record whose normalized query equals `query`.
    ///
    /// Exact match only; empty when nothing matches or nothing is loaded.
    pub fn description(&self, query: &str) -> String {
        let records = self.loaded_records();
        records
            .exact(&normalize_query(query))
            .map(|entry| entry.description.clone())
            .unwrap_or_default()
    }

    /// Read guard over the records, loading first if needed
    fn loaded_records(&self) -> RwLockReadGuard<'_, Records> {
        if !self.is_loaded() {
            self.load();
        }
        self.read()
    }

    // Records are only ever replaced whole, so a poisoned lock still holds consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Records> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Records> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KnowledgeStore for VerificationStore {
    fn search(&self, query: &str, top_k: usize) -> Vec<SearchResult> {
        Self::search(self, query, top_k)
    }

    fn description(&self, query: &str) -> String {
        Self::description(self, query)
    }

    fn is_loaded(&self) -> bool {
        Self::is_loaded(self)
    }

    fn store_name(&self) -> &'static str {
        "Verification"
    }
}

fn first_results(entry: &VerificationEntry, top_k: usize) -> Vec<SearchResult> {
    entry.search_results.iter().take(top_k).cloned().collect()
}

/// Read and parse the verification document at `path`
pub fn read_entries(path: &Path) -> Result<Vec<VerificationEntry>, LoadError> {
    if !path.exists() {
        return Err(LoadError::Missing(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path).map_err(|e| LoadError::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&raw).map_err(|e| LoadError::Parse(path.to_path_buf(), e))
}
