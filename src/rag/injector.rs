//! Context injection into the last user message of a conversation
//!
//! Every path that does not produce context (no user message, blank or
//! non-text query, no matching records) hands back the input slice
//! untouched as `Cow::Borrowed`. Only a successful retrieval allocates a new
//! message list, identical to the input except for the rewritten content of
//! the last user message.

use super::templates::{build_rag_user_message, format_context};
use crate::context::KnowledgeStore;
use crate::types::{Author, ChatMessage};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::info;

/// Number of snippets injected when no limit is configured
pub const DEFAULT_TOP_K: usize = 3;

/// Augments conversations with context from a shared knowledge store
#[derive(Clone)]
pub struct ContextInjector {
    store: Arc<dyn KnowledgeStore>,
    top_k: usize,
}

impl ContextInjector {
    pub fn new(store: Arc<dyn KnowledgeStore>) -> Self {
        Self {
            store,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Override the number of snippets injected per query
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn store(&self) -> &dyn KnowledgeStore {
        self.store.as_ref()
    }

    /// Inject context using the configured `top_k`
    pub fn inject<'a>(&self, messages: &'a [ChatMessage]) -> Cow<'a, [ChatMessage]> {
        inject_rag_context(self.store.as_ref(), messages, self.top_k)
    }
}

/// Rewrite the last user message of `messages` to carry retrieved context.
///
/// The message is located by scanning backwards for `Author::User`. Its
/// content is used as the query only when it is plain text; structured
/// content counts as an empty query.
pub fn inject_rag_context<'a>(
    store: &dyn KnowledgeStore,
    messages: &'a [ChatMessage],
    top_k: usize,
) -> Cow<'a, [ChatMessage]> {
    let Some(last_user) = messages.iter().rposition(|m| m.from == Author::User) else {
        info!("No user message found, skipping context injection");
        return Cow::Borrowed(messages);
    };

    let target = &messages[last_user];
    let query = target.content.as_text().unwrap_or_default();
    if query.trim().is_empty() {
        return Cow::Borrowed(messages);
    }

    let results = store.search(query, top_k);
    if results.is_empty() {
        info!(query = %query, store = store.store_name(), "No context found for query");
        return Cow::Borrowed(messages);
    }

    let context = format_context(&results);
    let description = store.description(query);
    let augmented = build_rag_user_message(query, &description, &context);

    info!(chunks = results.len(), query = %query, "Injected context chunks");

    let mut out = messages.to_vec();
    out[last_user] = target.with_content(augmented);
    Cow::Owned(out)
}
