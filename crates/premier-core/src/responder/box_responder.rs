//! BoxResponder -- object-safe dynamic dispatch wrapper for Responder.
//!
//! 1. `ResponderDyn` is the object-safe twin of `Responder` with boxed futures
//! 2. Blanket-impl `ResponderDyn` for all `T: Responder`
//! 3. `BoxResponder` wraps `Box<dyn ResponderDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use premier_types::error::ResponderError;

use super::provider::Responder;

/// Object-safe version of [`Responder`] with a boxed future.
pub trait ResponderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn respond_boxed<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ResponderError>> + Send + 'a>>;
}

impl<T: Responder> ResponderDyn for T {
    fn name(&self) -> &str {
        Responder::name(self)
    }

    fn respond_boxed<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ResponderError>> + Send + 'a>> {
        Box::pin(self.respond(text))
    }
}

/// Type-erased responder, chosen at startup (canned vs. remote endpoint).
pub struct BoxResponder {
    inner: Box<dyn ResponderDyn + Send + Sync>,
}

impl BoxResponder {
    pub fn new<T: Responder + 'static>(responder: T) -> Self {
        Self {
            inner: Box::new(responder),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn respond(&self, text: &str) -> Result<String, ResponderError> {
        self.inner.respond_boxed(text).await
    }
}

impl std::fmt::Debug for BoxResponder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxResponder")
            .field("name", &self.name())
            .finish()
    }
}
