//! Context Injector Integration Tests
//!
//! Drives `ContextInjector` end to end against a `VerificationStore` backed
//! by a temporary document.

use rag_shim::{
    inject_rag_context, Author, ChatMessage, ContextInjector, MessageContent, NoOpStore,
    SearchResult, VerificationEntry, VerificationStore,
};
use std::borrow::Cow;
use std::sync::Arc;
use tempfile::TempDir;

fn water_cycle_store() -> VerificationStore {
    VerificationStore::from_entries(vec![VerificationEntry {
        query: "water cycle".to_string(),
        description: "evaporation".to_string(),
        expected_keywords: None,
        answer: None,
        search_results: vec![SearchResult {
            rank: 1,
            location: "ch2".to_string(),
            chapter: None,
            section_num: None,
            page: None,
            block_type: None,
            chunk_id: None,
            score: 0.9,
            content_preview: None,
            full_content: "Water evaporates.".to_string(),
        }],
    }])
}

#[test]
fn test_end_to_end_water_cycle() {
    let injector = ContextInjector::new(Arc::new(water_cycle_store()));
    let messages = vec![
        ChatMessage::assistant("How can I help?"),
        ChatMessage::user("Water Cycle"),
    ];

    let out = injector.inject(&messages);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], messages[0]);
    assert_eq!(out[1].from, Author::User);
    assert_eq!(
        out[1].content.as_text(),
        Some(
            "[Context]\n[Source 1: ch2]\nWater evaporates.\n\n[User Query]\n\
             Question: Water Cycle\nSpecific Aspect: evaporation\nAnswer:"
        )
    );

    // Input is never mutated
    assert_eq!(messages[1].content.as_text(), Some("Water Cycle"));
}

#[test]
fn test_fuzzy_hit_omits_aspect_line() {
    let store = water_cycle_store();
    // {the, water, cycle} vs {water, cycle} -> 2/3, but no exact description
    let messages = vec![ChatMessage::user("the water cycle")];
    let out = inject_rag_context(&store, &messages, 3);

    let text = out[0].content.as_text().expect("text");
    assert!(text.contains("[Source 1: ch2]\nWater evaporates."));
    assert!(text.contains("Question: the water cycle\nAnswer:"));
    assert!(!text.contains("Specific Aspect"));
}

#[test]
fn test_passthrough_cases_are_unchanged() {
    let store = water_cycle_store();

    let no_user = vec![ChatMessage::system("sys"), ChatMessage::assistant("hi")];
    assert!(matches!(inject_rag_context(&store, &no_user, 3), Cow::Borrowed(_)));

    let blank = vec![ChatMessage::user("Water Cycle"), ChatMessage::user("   ")];
    let out = inject_rag_context(&store, &blank, 3);
    assert!(matches!(out, Cow::Borrowed(_)));
    assert_eq!(out.as_ref(), blank.as_slice());

    let miss = vec![ChatMessage::user("plate tectonics")];
    assert!(matches!(inject_rag_context(&store, &miss, 3), Cow::Borrowed(_)));

    let structured = vec![ChatMessage::user(MessageContent::Structured(
        serde_json::json!({"parts": ["Water Cycle"]}),
    ))];
    assert!(matches!(inject_rag_context(&store, &structured, 3), Cow::Borrowed(_)));

    let disabled = vec![ChatMessage::user("Water Cycle")];
    assert!(matches!(inject_rag_context(&NoOpStore, &disabled, 3), Cow::Borrowed(_)));
}

#[test]
fn test_host_fields_preserved_through_json() {
    let raw = r#"[
        {"from": "system", "content": "You are a tutor."},
        {"from": "user", "content": "water cycle", "id": "u-1", "createdAt": "2026-01-01T00:00:00Z"}
    ]"#;
    let messages: Vec<ChatMessage> = serde_json::from_str(raw).expect("parse");

    let out = inject_rag_context(&water_cycle_store(), &messages, 3);
    let json = serde_json::to_value(out.as_ref()).expect("serialize");

    assert_eq!(json[0]["content"], "You are a tutor.");
    assert_eq!(json[1]["id"], "u-1");
    assert_eq!(json[1]["createdAt"], "2026-01-01T00:00:00Z");
    assert_eq!(json[1]["from"], "user");
    assert!(json[1]["content"]
        .as_str()
        .expect("string content")
        .starts_with("[Context]\n[Source 1: ch2]"));
}

#[test]
fn test_missing_document_passes_conversation_through() {
    let tmp = TempDir::new().expect("tempdir");
    let store = Arc::new(VerificationStore::new(tmp.path().join("absent.json")));
    let injector = ContextInjector::new(store.clone());

    let messages = vec![ChatMessage::user("water cycle")];
    let out = injector.inject(&messages);

    assert!(matches!(out, Cow::Borrowed(_)));
    assert!(!store.is_loaded());
}

#[test]
fn test_top_k_limits_sources() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("verification_data.json");
    std::fs::write(
        &path,
        r#"[{"query": "cells", "description": "", "search_results": [
            {"rank": 1, "location": "a", "score": 0.9, "full_content": "one"},
            {"rank": 2, "location": "b", "score": 0.8, "full_content": "two"},
            {"rank": 3, "location": "c", "score": 0.7, "full_content": "three"},
            {"rank": 4, "location": "d", "score": 0.6, "full_content": "four"}
        ]}]"#,
    )
    .expect("write");

    let injector = ContextInjector::new(Arc::new(VerificationStore::new(&path)));
    let messages = vec![ChatMessage::user("Cells")];
    let text = injector.inject(&messages)[0]
        .content
        .as_text()
        .expect("text")
        .to_string();

    assert_eq!(
        text,
        "[Context]\n[Source 1: a]\none\n\n[Source 2: b]\ntwo\n\n[Source 3: c]\nthree\n\n\
         [User Query]\nQuestion: Cells\nAnswer:"
    );
}
