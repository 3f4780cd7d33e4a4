//! JSON wire format between the chat panel and a remote responder.
//!
//! Request:  `{"message": "...", "context": {"page": "/", "timestamp": 1700000000000}}`
//! Response: `{"reply": "..."}`

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Body of the `POST` sent to a configured responder endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: ChatContext,
}

/// Where and when the message was sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatContext {
    /// Page path the widget is embedded in.
    pub page: String,
    /// Milliseconds since the Unix epoch.
    #[serde(alias = "ts")]
    pub timestamp: i64,
}

impl ChatRequest {
    /// Build a request stamped with the current time.
    pub fn new(message: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: ChatContext {
                page: page.into(),
                timestamp: Utc::now().timestamp_millis(),
            },
        }
    }
}

/// Successful responder body. A missing or null `reply` is allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let req = ChatRequest::new("hello", "/loans");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["message"], "hello");
        assert_eq!(value["context"]["page"], "/loans");
        assert!(value["context"]["timestamp"].as_i64().unwrap() > 0);
    }

    #[test]
    fn test_context_accepts_ts_alias() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"message":"hi","context":{"page":"/","ts":42}}"#).unwrap();
        assert_eq!(req.context.timestamp, 42);
    }

    #[test]
    fn test_reply_optional() {
        let empty: ChatReply = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.reply, None);
        let null: ChatReply = serde_json::from_str(r#"{"reply":null}"#).unwrap();
        assert_eq!(null.reply, None);
        let full: ChatReply = serde_json::from_str(r#"{"reply":"Hi there"}"#).unwrap();
        assert_eq!(full.reply.as_deref(), Some("Hi there"));
    }
}
