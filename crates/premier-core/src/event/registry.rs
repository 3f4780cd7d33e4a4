//! Handler registration and synchronous dispatch.

use std::collections::HashMap;

use tracing::trace;

use super::{EventKind, PageEvent};

/// A registered event callback.
pub type Handler = Box<dyn FnMut(&PageEvent) + Send>;

/// Anything handlers can be attached to.
pub trait EventSource {
    fn register(&mut self, kind: EventKind, handler: Handler);
}

/// In-memory event source: dispatches each event to every handler registered
/// for its kind, in registration order.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<EventKind, Vec<Handler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event`. Returns how many handlers ran.
    pub fn dispatch(&mut self, event: &PageEvent) -> usize {
        let kind = event.kind();
        let Some(handlers) = self.handlers.get_mut(&kind) else {
            trace!(?kind, "no handlers for event");
            return 0;
        };
        for handler in handlers.iter_mut() {
            handler(event);
        }
        handlers.len()
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }
}

impl EventSource for HandlerRegistry {
    fn register(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.entry(kind).or_default().push(handler);
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<_, _> = self
            .handlers
            .iter()
            .map(|(kind, handlers)| (*kind, handlers.len()))
            .collect();
        f.debug_struct("HandlerRegistry")
            .field("handlers", &counts)
            .finish()
    }
}
