//! Context module - Knowledge stores and query matching
//!
//! Provides precomputed supporting context for user queries.
//!
//! ## KnowledgeStore trait
//!
//! The `KnowledgeStore` trait abstracts the retrieval interface so
//! different backends can be swapped (precomputed verification data, NoOp).

pub mod knowledge_store;
pub mod matching;
pub mod verification_store;

pub use knowledge_store::{KnowledgeStore, NoOpStore};
pub use matching::{normalize_query, overlap_score, query_tokens, FUZZY_MATCH_THRESHOLD};
pub use verification_store::{LoadError, LoadState, VerificationStore};
