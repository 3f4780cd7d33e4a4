//! Chat widget controller.
//!
//! Owns the panel visibility, the transcript, and the exchange with a
//! responder. The controller is cheap to clone; clones share state, so a
//! host can hand one to each event handler.
//!
//! Submissions are not serialized: a second message sent while a reply is
//! pending races the first, and replies land in arrival order. Pending
//! replies still render if the panel is closed in the meantime.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, warn};

use premier_types::chat::Message;
use premier_types::panel::{PanelAction, PanelVisibility};

use crate::responder::BoxResponder;

use super::view::ChatView;

/// Shown when the responder fails, whatever the cause.
pub const FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble connecting right now. Please try again in a moment, \
     or call us at 1-800-PREMIER.";

/// Text of the transient status entry shown while waiting for a reply.
pub const TYPING_INDICATOR: &str = "Assistant is typing...";

/// What happened to a submitted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing was appended and the responder was not called.
    Ignored,
    /// The responder's reply was appended.
    Replied,
    /// The responder failed and the fallback apology was appended.
    FellBack,
}

struct PanelState {
    visibility: PanelVisibility,
    mounted: bool,
    transcript: Vec<Message>,
}

struct Inner {
    view: Arc<dyn ChatView>,
    responder: BoxResponder,
    focus_delay: Duration,
    state: Mutex<PanelState>,
}

/// Drives one chat panel.
#[derive(Clone)]
pub struct ChatController {
    inner: Arc<Inner>,
}

impl ChatController {
    pub fn new(view: Arc<dyn ChatView>, responder: BoxResponder, focus_delay: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                view,
                responder,
                focus_delay,
                state: Mutex::new(PanelState {
                    visibility: PanelVisibility::Hidden,
                    mounted: false,
                    transcript: Vec::new(),
                }),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, PanelState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn visibility(&self) -> PanelVisibility {
        self.state().visibility
    }

    /// Snapshot of the transcript (user and bot messages, in render order).
    pub fn transcript(&self) -> Vec<Message> {
        self.state().transcript.clone()
    }

    pub fn responder_name(&self) -> &str {
        self.inner.responder.name()
    }

    /// Apply a panel action, updating the view only if the state changed.
    fn transition(&self, action: PanelAction) -> PanelVisibility {
        let mut state = self.state();
        let from = state.visibility;
        let to = from.apply(action);
        if to != from {
            state.visibility = to;
            self.inner.view.set_visibility(to);
            debug!(%from, %to, ?action, "chat panel transition");
        }
        to
    }

    /// Show the panel and focus its input once layout has settled.
    ///
    /// Must be called from within a tokio runtime.
    pub fn open_panel(&self) {
        {
            let mut state = self.state();
            if !state.mounted {
                self.inner.view.mount();
                state.mounted = true;
            }
        }
        self.transition(PanelAction::Open);

        let view = Arc::clone(&self.inner.view);
        let delay = self.inner.focus_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            view.focus_input();
        });
    }

    pub fn minimize(&self) -> PanelVisibility {
        self.transition(PanelAction::Minimize)
    }

    pub fn restore(&self) -> PanelVisibility {
        self.transition(PanelAction::Restore)
    }

    pub fn toggle_minimize(&self) -> PanelVisibility {
        self.transition(PanelAction::ToggleMinimize)
    }

    pub fn close(&self) -> PanelVisibility {
        self.transition(PanelAction::Close)
    }

    /// Append to the transcript and render, under one lock so the transcript
    /// order always equals render order.
    fn append(&self, message: Message) {
        let mut state = self.state();
        self.inner.view.append_message(&message);
        state.transcript.push(message);
    }

    /// Send `text` to the responder and render the exchange.
    ///
    /// Responder failures are logged and replaced by [`FALLBACK_REPLY`];
    /// they never reach the caller.
    pub async fn submit_message(&self, text: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring blank chat submission");
            return SubmitOutcome::Ignored;
        }

        self.append(Message::user(text));
        self.inner.view.clear_input();

        let indicator = Message::status(TYPING_INDICATOR);
        self.inner.view.append_message(&indicator);

        let result = self.inner.responder.respond(text).await;
        self.inner.view.remove_message(indicator.id);

        match result {
            Ok(reply) => {
                self.append(Message::bot(reply));
                SubmitOutcome::Replied
            }
            Err(e) => {
                warn!(
                    error = %e,
                    responder = self.inner.responder.name(),
                    "responder failed; showing fallback reply"
                );
                self.append(Message::bot(FALLBACK_REPLY));
                SubmitOutcome::FellBack
            }
        }
    }
}
