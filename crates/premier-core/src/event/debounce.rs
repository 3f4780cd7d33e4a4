//! Trailing-edge debounce for high-frequency events (scroll).
//!
//! Each call cancels the previously scheduled action; only the last call in
//! a burst runs, `delay` after it was made.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Scroll handlers run through a 10 ms debounce.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(10);

pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<CancellationToken>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `action`, replacing any action still waiting.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let token = CancellationToken::new();
        let previous = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(token.clone());
        if let Some(previous) = previous {
            previous.cancel();
        }

        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => action(),
            }
        });
    }
}

impl std::fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn only_last_call_in_burst_runs() {
        let debouncer = Debouncer::new(SCROLL_DEBOUNCE);
        let ran = Arc::new(Mutex::new(Vec::new()));

        for i in 0..5 {
            let ran = Arc::clone(&ran);
            debouncer.call(move || ran.lock().unwrap().push(i));
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(*ran.lock().unwrap(), vec![4]);
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_calls_all_run() {
        let debouncer = Debouncer::new(SCROLL_DEBOUNCE);
        let ran = Arc::new(Mutex::new(0));

        for _ in 0..3 {
            let ran = Arc::clone(&ran);
            debouncer.call(move || *ran.lock().unwrap() += 1);
            tokio::time::sleep(Duration::from_millis(15)).await;
        }

        assert_eq!(*ran.lock().unwrap(), 3);
    }
}
