//! HttpResponder -- concrete [`Responder`] that forwards chat text to a
//! remote endpoint.
//!
//! One `POST` per message with the body `{message, context: {page, timestamp}}`.
//! A 2xx answer is parsed as `{reply}`; anything else is an error the chat
//! controller turns into its fixed apology.
//!
//! The optional bearer token is held in a [`SecretString`] and only exposed
//! while building the request header.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use premier_core::responder::Responder;
use premier_types::error::ResponderError;
use premier_types::wire::{ChatReply, ChatRequest};

/// Reply used when the endpoint answers 2xx without a usable `reply`.
pub const DEFAULT_REPLY: &str =
    "Thanks for your message! A Premier Bank representative will follow up shortly.";

/// Remote responder backed by a JSON endpoint.
pub struct HttpResponder {
    client: reqwest::Client,
    endpoint: String,
    page: String,
    api_key: Option<SecretString>,
}

impl HttpResponder {
    /// Create a responder posting to `endpoint`, reporting `page` as context.
    pub fn new(
        endpoint: impl Into<String>,
        page: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ResponderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ResponderError::Unavailable(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            page: page.into(),
            api_key: None,
        })
    }

    /// Send `Authorization: Bearer <key>` with every request.
    pub fn with_api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    fn map_send_error(e: reqwest::Error) -> ResponderError {
        if e.is_timeout() {
            ResponderError::Timeout
        } else {
            ResponderError::Network(e.to_string())
        }
    }
}

impl Responder for HttpResponder {
    fn name(&self) -> &str {
        "http"
    }

    async fn respond(&self, text: &str) -> Result<String, ResponderError> {
        let body = ChatRequest::new(text, self.page.as_str());

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await.map_err(Self::map_send_error)?;
        let status = response.status();
        let raw = response.text().await.map_err(Self::map_send_error)?;
        debug!(status = status.as_u16(), bytes = raw.len(), "responder answered");

        if !status.is_success() {
            return Err(ResponderError::Status {
                status: status.as_u16(),
                body: raw,
            });
        }

        let reply: ChatReply =
            serde_json::from_str(&raw).map_err(|e| ResponderError::Decode(e.to_string()))?;
        Ok(reply
            .reply
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REPLY.to_string()))
    }
}

impl std::fmt::Debug for HttpResponder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResponder")
            .field("endpoint", &self.endpoint)
            .field("page", &self.page)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
