//! Widget configuration types.
//!
//! `WidgetConfig` represents `premier.toml`. Every field has a default, so an
//! empty or missing file yields a working canned-responder setup.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration for the chat widget and page handlers.
#[derive(Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Remote responder URL. When unset the canned responder is used.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Page path reported in the request context.
    #[serde(default = "default_page")]
    pub page: String,

    /// Artificial latency of the canned responder.
    #[serde(default = "default_canned_delay_ms")]
    pub canned_delay_ms: u64,

    /// Delay between opening the panel and focusing its input.
    #[serde(default = "default_focus_delay_ms")]
    pub focus_delay_ms: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Bearer token sent to the endpoint. Never serialized back out.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

fn default_page() -> String {
    "/".to_string()
}

fn default_canned_delay_ms() -> u64 {
    800
}

fn default_focus_delay_ms() -> u64 {
    100
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            page: default_page(),
            canned_delay_ms: default_canned_delay_ms(),
            focus_delay_ms: default_focus_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            api_key: None,
        }
    }
}

impl WidgetConfig {
    pub fn canned_delay(&self) -> Duration {
        Duration::from_millis(self.canned_delay_ms)
    }

    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The endpoint, treating a blank string as unset.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }

    /// Reject endpoints that are not http(s) URLs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(endpoint) = self.endpoint() {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ConfigError::InvalidEndpoint(endpoint.to_string()));
            }
        }
        Ok(())
    }
}

// Hand-written so the api key never lands in logs.
impl fmt::Debug for WidgetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetConfig")
            .field("endpoint", &self.endpoint)
            .field("page", &self.page)
            .field("canned_delay_ms", &self.canned_delay_ms)
            .field("focus_delay_ms", &self.focus_delay_ms)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
