//! Conversation messages exchanged with the hosting chat application
//!
//! Only `from` and `content` are interpreted here. Any other fields the host
//! attaches are carried through untouched in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Author of a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    System,
    User,
    Assistant,
}

/// Message body: plain text, or anything else the host sends (multimodal parts etc.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Structured(Value),
}

impl MessageContent {
    /// The text body, or `None` for structured content
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Structured(_) => None,
        }
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// A single conversation message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub from: Author,
    pub content: MessageContent,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatMessage {
    pub fn new(from: Author, content: impl Into<MessageContent>) -> Self {
        Self {
            from,
            content: content.into(),
            extra: Map::new(),
        }
    }

    pub fn system(content: impl Into<MessageContent>) -> Self {
        Self::new(Author::System, content)
    }

    pub fn user(content: impl Into<MessageContent>) -> Self {
        Self::new(Author::User, content)
    }

    pub fn assistant(content: impl Into<MessageContent>) -> Self {
        Self::new(Author::Assistant, content)
    }

    /// Copy of this message with the content replaced and every other field kept
    pub fn with_content(&self, content: impl Into<MessageContent>) -> Self {
        Self {
            from: self.from,
            content: content.into(),
            extra: self.extra.clone(),
        }
    }
}
