//! Visibility state machines for the chat panel and the contact-options modal.
//!
//! ```text
//! hidden --open--> open --minimize--> minimized --restore--> open --close--> hidden
//! ```
//!
//! `open` and `close` also apply from `minimized`. Actions that do not apply
//! in the current state leave it unchanged.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Visibility of the floating chat panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelVisibility {
    #[default]
    Hidden,
    Open,
    Minimized,
}

/// A user action on the panel chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Open,
    Minimize,
    Restore,
    /// The minimize button flips between minimized and open.
    ToggleMinimize,
    Close,
}

impl PanelVisibility {
    /// The state reached by applying `action`. Returns `self` when the action
    /// does not apply.
    pub fn apply(self, action: PanelAction) -> PanelVisibility {
        use PanelAction as A;
        use PanelVisibility as V;

        match (self, action) {
            (_, A::Open) => V::Open,
            (V::Open, A::Minimize) => V::Minimized,
            (V::Minimized, A::Restore) => V::Open,
            (V::Open, A::ToggleMinimize) => V::Minimized,
            (V::Minimized, A::ToggleMinimize) => V::Open,
            (V::Open | V::Minimized, A::Close) => V::Hidden,
            (state, _) => state,
        }
    }
}

impl fmt::Display for PanelVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelVisibility::Hidden => write!(f, "hidden"),
            PanelVisibility::Open => write!(f, "open"),
            PanelVisibility::Minimized => write!(f, "minimized"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let s = PanelVisibility::default();
        assert_eq!(s, PanelVisibility::Hidden);
        let s = s.apply(PanelAction::Open);
        assert_eq!(s, PanelVisibility::Open);
        let s = s.apply(PanelAction::Minimize);
        assert_eq!(s, PanelVisibility::Minimized);
        let s = s.apply(PanelAction::Restore);
        assert_eq!(s, PanelVisibility::Open);
        let s = s.apply(PanelAction::Close);
        assert_eq!(s, PanelVisibility::Hidden);
    }

    #[test]
    fn test_open_is_idempotent() {
        for start in [
            PanelVisibility::Hidden,
            PanelVisibility::Open,
            PanelVisibility::Minimized,
        ] {
            assert_eq!(start.apply(PanelAction::Open), PanelVisibility::Open);
        }
    }

    #[test]
    fn test_inapplicable_actions_are_noops() {
        let hidden = PanelVisibility::Hidden;
        assert_eq!(hidden.apply(PanelAction::Minimize), hidden);
        assert_eq!(hidden.apply(PanelAction::Restore), hidden);
        assert_eq!(hidden.apply(PanelAction::ToggleMinimize), hidden);
        assert_eq!(hidden.apply(PanelAction::Close), hidden);
        assert_eq!(
            PanelVisibility::Open.apply(PanelAction::Restore),
            PanelVisibility::Open
        );
    }

    #[test]
    fn test_toggle_minimize_flips() {
        let s = PanelVisibility::Open.apply(PanelAction::ToggleMinimize);
        assert_eq!(s, PanelVisibility::Minimized);
        assert_eq!(s.apply(PanelAction::ToggleMinimize), PanelVisibility::Open);
    }

    #[test]
    fn test_close_from_minimized() {
        assert_eq!(
            PanelVisibility::Minimized.apply(PanelAction::Close),
            PanelVisibility::Hidden
        );
    }
}
