//! POST /api/chat -- answer one widget message.
//!
//! Accepts the widget request body `{message, context: {page, timestamp}}`
//! and replies with `{reply}`. The context is optional here so the endpoint
//! can be exercised with a bare `{message}` from curl.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use tracing::{Instrument, field, info_span};

use premier_observe::attrs;
use premier_types::wire::{ChatContext, ChatReply};

use crate::http::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatBody {
    pub message: String,
    #[serde(default)]
    pub context: Option<ChatContext>,
}

pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatBody>,
) -> Result<Json<ChatReply>, AppError> {
    let message = body.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }

    let page = body.context.as_ref().map_or("", |c| c.page.as_str());
    let span = info_span!(
        "api_chat",
        chat.responder = state.responder.name(),
        chat.page = page,
        chat.message_len = message.len(),
        chat.outcome = field::Empty,
    );

    let result = state.responder.respond(message).instrument(span.clone()).await;
    let outcome = if result.is_ok() {
        attrs::OUTCOME_REPLIED
    } else {
        attrs::OUTCOME_FELL_BACK
    };
    span.record(attrs::CHAT_OUTCOME, outcome);

    Ok(Json(ChatReply {
        reply: Some(result?),
    }))
}
