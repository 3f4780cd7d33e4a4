//! Span field names and values shared across the workspace.
//!
//! Spans declare these fields by their dotted names (e.g. `chat.outcome =
//! tracing::field::Empty`); the constants are what `Span::record` is called
//! with, so every recorder agrees on the key.

/// Outcome of a chat submission.
pub const CHAT_OUTCOME: &str = "chat.outcome";

/// The responder produced a reply.
pub const OUTCOME_REPLIED: &str = "replied";

/// The responder failed; the fixed apology was shown instead.
pub const OUTCOME_FELL_BACK: &str = "fell_back";

/// Blank input, nothing was sent.
pub const OUTCOME_IGNORED: &str = "ignored";
