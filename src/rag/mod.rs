//! RAG module - Splices retrieved context into a conversation
//!
//! `ContextInjector` finds the last user message, retrieves supporting
//! snippets from a `KnowledgeStore`, and rewrites that message with the
//! prompt template from `templates`.

pub mod injector;
pub mod templates;

pub use injector::{inject_rag_context, ContextInjector, DEFAULT_TOP_K};
pub use templates::{build_rag_user_message, format_context};
