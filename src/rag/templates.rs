//! Prompt templates for context-augmented user messages
//!
//! The augmented message has a fixed shape:
//!
//! ```text
//! [Context]
//! [Source 1: {location}]
//! {full_content}
//!
//! [Source 2: {location}]
//! {full_content}
//!
//! [User Query]
//! Question: {query}
//! Specific Aspect: {description}
//! Answer:
//! ```
//!
//! The `Specific Aspect` line is present only when the description is non-empty.

use crate::types::SearchResult;

/// Format results as numbered source blocks separated by a blank line
pub fn format_context(results: &[SearchResult]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| format!("[Source {}: {}]\n{}", i + 1, r.location, r.full_content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build the augmented user message text
pub fn build_rag_user_message(query: &str, description: &str, context: &str) -> String {
    let mut out = String::with_capacity(context.len() + query.len() + description.len() + 64);
    out.push_str("[Context]\n");
    out.push_str(context);
    out.push_str("\n\n[User Query]\nQuestion: ");
    out.push_str(query);
    out.push('\n');
    if !description.is_empty() {
        out.push_str("Specific Aspect: ");
        out.push_str(description);
        out.push('\n');
    }
    out.push_str("Answer:");
    out
}
