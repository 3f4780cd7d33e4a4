//! Chat message types for the assistant panel.
//!
//! The transcript is an ordered, append-only list of [`Message`] values.
//! Render order is the ordering that matters; `created_at` is informational.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;

/// Who a chat message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Text the visitor typed.
    User,
    /// A reply from the responder (or the fallback apology).
    Bot,
    /// Transient indicator such as "typing".
    Status,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Bot => write!(f, "bot"),
            MessageRole::Status => write!(f, "status"),
        }
    }
}

/// A single entry in the chat panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: MessageRole,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a message with a fresh time-ordered id.
    pub fn new(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageRole::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(MessageRole::Bot, text)
    }

    pub fn status(text: impl Into<String>) -> Self {
        Self::new(MessageRole::Status, text)
    }

    /// Status messages are never kept in the transcript.
    pub fn is_transient(&self) -> bool {
        self.role == MessageRole::Status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_display() {
        assert_eq!(MessageRole::User.to_string(), "user");
        assert_eq!(MessageRole::Bot.to_string(), "bot");
    }

    #[test]
    fn test_message_role_serde() {
        let json = serde_json::to_string(&MessageRole::Status).unwrap();
        assert_eq!(json, "\"status\"");
    }

    #[test]
    fn test_constructors_set_role() {
        assert_eq!(Message::user("hi").role, MessageRole::User);
        assert_eq!(Message::bot("hello").role, MessageRole::Bot);
        assert!(Message::status("typing").is_transient());
        assert!(!Message::bot("hello").is_transient());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Message::user("a");
        let b = Message::user("a");
        assert_ne!(a.id, b.id);
    }
}
