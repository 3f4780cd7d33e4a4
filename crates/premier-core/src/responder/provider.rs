//! Responder trait definition.

use premier_types::error::ResponderError;

/// Converts a visitor's chat text into a reply string.
///
/// Uses native async fn in traits (RPITIT). Implementations live here
/// (`CannedResponder`) and in premier-infra (`HttpResponder`).
pub trait Responder: Send + Sync {
    /// Short name used in logs (e.g., "canned", "http").
    fn name(&self) -> &str;

    /// Produce a reply for `text`. `text` is already trimmed and non-empty.
    fn respond(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<String, ResponderError>> + Send;
}
