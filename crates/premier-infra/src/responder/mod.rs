//! Responder implementations and the factory that picks one.
//!
//! An endpoint in the configuration selects [`HttpResponder`]; without one
//! the widget answers locally with the canned responder from `premier-core`.

pub mod http;

use secrecy::SecretString;
use tracing::info;

use premier_core::responder::{BoxResponder, CannedResponder};
use premier_types::config::WidgetConfig;
use premier_types::error::ResponderError;

pub use self::http::{DEFAULT_REPLY, HttpResponder};

/// Create the responder described by `config`.
///
/// # Errors
///
/// Returns [`ResponderError::Unavailable`] if the endpoint is not an http(s)
/// URL or the HTTP client cannot be built.
pub fn create_responder(config: &WidgetConfig) -> Result<BoxResponder, ResponderError> {
    config
        .validate()
        .map_err(|e| ResponderError::Unavailable(e.to_string()))?;

    match config.endpoint() {
        Some(endpoint) => {
            let mut responder =
                HttpResponder::new(endpoint, config.page.as_str(), config.request_timeout())?;
            if let Some(key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
                responder = responder.with_api_key(SecretString::from(key.to_string()));
            }
            info!(endpoint, "using remote responder");
            Ok(BoxResponder::new(responder))
        }
        None => {
            info!(delay_ms = config.canned_delay_ms, "using canned responder");
            Ok(BoxResponder::new(CannedResponder::new(config.canned_delay())))
        }
    }
}
