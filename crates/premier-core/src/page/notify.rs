//! Toast notifications with auto-dismiss.
//!
//! Only one notification is visible at a time: showing a new one removes the
//! current one and cancels its pending dismissal.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use premier_types::page::Notification;

use super::PageView;

/// How long a notification stays up.
pub const DISPLAY_FOR: Duration = Duration::from_secs(5);

/// Length of the slide-out animation before removal.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

/// The notification on screen: its sequence number and pending dismissal.
struct Showing {
    seq: u64,
    dismiss: CancellationToken,
}

#[derive(Default)]
struct Slot {
    next_seq: u64,
    showing: Option<Showing>,
}

pub struct NotificationCenter {
    view: Arc<dyn PageView>,
    slot: Arc<Mutex<Slot>>,
}

impl NotificationCenter {
    pub fn new(view: Arc<dyn PageView>) -> Self {
        Self {
            view,
            slot: Arc::default(),
        }
    }

    /// Replace whatever is showing with `notification` and schedule its removal.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, notification: Notification) {
        let token = CancellationToken::new();
        let (seq, previous) = {
            let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            let seq = slot.next_seq;
            slot.next_seq += 1;
            let previous = slot.showing.replace(Showing {
                seq,
                dismiss: token.clone(),
            });
            (seq, previous)
        };
        if let Some(previous) = previous {
            previous.dismiss.cancel();
            self.view.dismiss_notification();
        }

        self.view.show_notification(&notification);

        let view = Arc::clone(&self.view);
        let slot = Arc::clone(&self.slot);
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(DISPLAY_FOR + EXIT_ANIMATION) => {
                    let expired = {
                        let mut slot = slot.lock().unwrap_or_else(PoisonError::into_inner);
                        // Only the notification still on screen is removed here.
                        if slot.showing.as_ref().is_some_and(|s| s.seq == seq) {
                            slot.showing = None;
                            true
                        } else {
                            false
                        }
                    };
                    if expired {
                        view.dismiss_notification();
                    }
                }
            }
        });
    }
}
