//! Animated stat counters.
//!
//! Counters ramp from zero to their target in 100 increments, one every
//! 20 ms, the first time the stats block is at least half visible. They never
//! run twice in a page session.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;

use super::PageView;

/// Increments per ramp.
pub const RAMP_STEPS: u32 = 100;

/// Time between increments.
pub const RAMP_TICK: Duration = Duration::from_millis(20);

/// Visible fraction of the stats block that starts the animation.
pub const TRIGGER_RATIO: f64 = 0.5;

/// Render a stat with its suffix: `2.5M+`, `50K+`, `15+`.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        let millions = n as f64 / 1_000_000.0;
        // Quarter values like 1.25 are exact halves at one decimal: they round
        // up, where `{:.1}` would round them to even.
        let quarters = millions * 4.0;
        if quarters.fract() == 0.0 && quarters as u64 % 2 == 1 {
            let tenths = (millions * 10.0).ceil() as u64;
            format!("{}.{}M+", tenths / 10, tenths % 10)
        } else {
            format!("{millions:.1}M+")
        }
    } else if n >= 1_000 {
        format!("{}K+", (n as f64 / 1_000.0).round() as u64)
    } else {
        format!("{n}+")
    }
}

/// The sequence of values a counter displays on its way to `target`.
///
/// Yields `floor(current)` for each increment below the target and finally
/// the exact target.
#[derive(Debug, Clone)]
pub struct CounterRamp {
    target: u64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterRamp {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            increment: target as f64 / RAMP_STEPS as f64,
            current: 0.0,
            done: false,
        }
    }
}

impl Iterator for CounterRamp {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.done = true;
            Some(self.target)
        } else {
            Some(self.current.floor() as u64)
        }
    }
}

/// One-shot guard for the counter animation.
#[derive(Debug, Default)]
pub struct CounterAnimator {
    has_animated: bool,
}

impl CounterAnimator {
    pub fn has_animated(&self) -> bool {
        self.has_animated
    }

    /// Returns true exactly once: the first time the stats block is visible
    /// enough.
    pub fn trigger(&mut self, visible_ratio: f64) -> bool {
        if self.has_animated || visible_ratio < TRIGGER_RATIO {
            return false;
        }
        self.has_animated = true;
        true
    }
}

/// Drive one counter to its target, writing each value through the view.
pub async fn run_counter(view: Arc<dyn PageView>, counter: String, target: u64) {
    let mut ticker = tokio::time::interval(RAMP_TICK);
    // The first tick of an interval completes immediately.
    ticker.tick().await;
    for value in CounterRamp::new(target) {
        ticker.tick().await;
        view.set_counter_text(&counter, &format_count(value));
    }
}

/// Run all counters concurrently.
pub async fn run_counters(view: Arc<dyn PageView>, counters: Vec<(String, u64)>) {
    join_all(
        counters
            .into_iter()
            .map(|(id, target)| run_counter(Arc::clone(&view), id, target)),
    )
    .await;
}
