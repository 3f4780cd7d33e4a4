use thiserror::Error;

/// Errors from turning chat text into a reply.
///
/// The chat panel never shows these to the visitor; they are logged and
/// replaced by a fixed apology.
#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("responder returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode responder reply: {0}")]
    Decode(String),

    #[error("responder timed out")]
    Timeout,

    #[error("responder unavailable: {0}")]
    Unavailable(String),
}

/// Errors from loading the widget configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(String),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid endpoint '{0}': must be an http(s) URL")]
    InvalidEndpoint(String),
}
