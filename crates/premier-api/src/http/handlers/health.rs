//! GET /health -- liveness and responder info.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub responder: String,
    pub uptime_secs: u64,
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        responder: state.responder.name().to_string(),
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}
