//! RAG Shim: precomputed context injection for chat conversations
//!
//! Substitutes an offline-computed knowledge document for a live retrieval
//! pipeline. A user query is matched against canonical verification records
//! and the matching snippets are spliced into the conversation before it
//! reaches the language model.
//!
//! ## Architecture
//!
//! - **Knowledge Store** (`context`): loads the verification document once and
//!   answers exact and token-overlap lookups
//! - **Context Injector** (`rag`): rewrites the last user message with the
//!   retrieved context using a fixed prompt template
//! - **Configuration** (`config`): document path and snippet limit

pub mod config;
pub mod context;
pub mod rag;
pub mod types;

pub use config::{ConfigError, RagConfig};
pub use context::{KnowledgeStore, LoadError, LoadState, NoOpStore, VerificationStore};
pub use rag::{inject_rag_context, ContextInjector, DEFAULT_TOP_K};
pub use types::{Author, ChatMessage, MessageContent, SearchResult, VerificationEntry};
