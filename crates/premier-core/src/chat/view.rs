//! Rendering surface the chat controller talks to.
//!
//! Production hosts render into a terminal (or a page); tests supply a fake
//! that records calls.

use uuid::Uuid;

use premier_types::chat::Message;
use premier_types::panel::PanelVisibility;

/// Capabilities the chat panel needs from whatever renders it.
///
/// All methods are synchronous and cheap: they reflect state, they never
/// block on IO.
pub trait ChatView: Send + Sync {
    /// Create the panel, message list and input if they do not exist yet.
    /// Called once, on the first open.
    fn mount(&self) {}

    /// Render a message at the end of the thread.
    fn append_message(&self, message: &Message);

    /// Remove a previously appended (transient) message.
    fn remove_message(&self, id: Uuid);

    fn set_visibility(&self, visibility: PanelVisibility);

    fn focus_input(&self);

    fn clear_input(&self);
}
