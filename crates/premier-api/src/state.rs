//! Application state shared by the HTTP handlers.

use std::sync::Arc;
use std::time::Instant;

use premier_core::responder::BoxResponder;

/// Shared state for the development responder endpoint.
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<BoxResponder>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(responder: BoxResponder) -> Self {
        Self {
            responder: Arc::new(responder),
            started_at: Instant::now(),
        }
    }
}
