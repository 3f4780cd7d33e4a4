//! Development responder endpoint.
//!
//! `POST /api/chat` speaks the widget's wire format and answers with the
//! canned topic routing, so the chat panel can be pointed at a real HTTP
//! endpoint locally. `GET /health` reports liveness.

pub mod error;
pub mod handlers;
pub mod router;
