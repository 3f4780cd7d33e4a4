//! Fade-in of cards as they scroll into view.

use std::collections::HashSet;

/// Visible fraction at which an element is revealed.
pub const REVEAL_RATIO: f64 = 0.1;

/// Elements are revealed once and stay revealed.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    /// Returns true when `element` becomes revealed by this intersection.
    pub fn on_intersect(&mut self, element: &str, ratio: f64) -> bool {
        ratio >= REVEAL_RATIO && self.revealed.insert(element.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_above_threshold() {
        let mut tracker = RevealTracker::default();
        assert!(!tracker.on_intersect("card-1", 0.05));
        assert!(tracker.on_intersect("card-1", 0.1));
        assert!(!tracker.on_intersect("card-1", 0.9));
        assert!(tracker.on_intersect("card-2", 0.5));
    }
}
