//! Chat message records and the default fixture list.

use serde::{Deserialize, Serialize};

/// Who authored a chat entry.
///
/// The serialized form doubles as the CSS class the chat panel styles the
/// entry with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChatRole {
    /// Reply from the assistant.
    #[serde(rename = "assistant-message", alias = "gpt-message")]
    Assistant,
    /// Message typed by the user.
    #[serde(rename = "user-message")]
    User,
}

impl ChatRole {
    /// CSS class applied to entries with this role.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Assistant => "assistant-message",
            Self::User => "user-message",
        }
    }
}

/// A single entry in the chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }
}

/// Placeholder conversation shown until the panel is wired to a backend.
pub fn default_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::assistant("Hello, I'm GPT-4. How can I assist you?"),
        ChatMessage::user("Can you provide an example of a smart contract?"),
        ChatMessage::assistant("Certainly! Here's a simple ink! smart contract example."),
    ]
}
