//! Page-level value types shared by the handlers and the views.

use serde::{Deserialize, Serialize};

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

/// A toast shown in the corner of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

/// A page section as seen by scroll-spy: its anchor id and its viewport top.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    /// Distance from the viewport top in pixels (negative once scrolled past).
    pub top: f64,
}

impl Section {
    pub fn new(id: &str, top: f64) -> Self {
        Self {
            id: id.to_string(),
            top,
        }
    }
}

/// Keys the page handlers react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Enter,
    Other,
}
