//! Page events and handler registration.
//!
//! Hosts translate whatever their rendering surface produces into
//! [`PageEvent`]s and push them through an [`EventSource`]. Handlers are plain
//! closures, so they can be exercised without a real surface.

pub mod debounce;
pub mod registry;

pub use debounce::Debouncer;
pub use registry::{EventSource, Handler, HandlerRegistry};

use premier_types::page::{Key, Section};

/// Coarse event category handlers register against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Scroll,
    KeyDown,
    Intersect,
    Input,
    Blur,
    Submit,
}

/// What was clicked.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickTarget {
    /// The hamburger button.
    NavToggle,
    /// A link inside the nav menu. `target_top` is the viewport top of the
    /// element the anchor points at, if it exists.
    NavLink {
        href: String,
        target_top: Option<f64>,
        page_y: f64,
        header_height: f64,
    },
    /// The floating chat button that opens the contact-options modal.
    ChatButton,
    ModalClose,
    /// The modal backdrop itself (not its content).
    ModalBackdrop,
    /// One of the contact options inside the modal.
    ChatOption(String),
    /// "Chat with an agent" inside the modal.
    AgentHandoff,
    /// The "Learn more" button of a service card, by card title.
    ServiceCard(String),
    /// Anything else on the page.
    Elsewhere,
}

impl ClickTarget {
    /// Whether the click landed inside the nav toggle or the nav menu.
    pub fn is_inside_nav(&self) -> bool {
        matches!(self, ClickTarget::NavToggle | ClickTarget::NavLink { .. })
    }
}

/// An event delivered by the rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Click(ClickTarget),
    Scroll {
        scroll_y: f64,
        header_height: f64,
        /// Sections with ids, in document order.
        sections: Vec<Section>,
    },
    KeyDown {
        key: Key,
        /// Index of the focused service card, if focus is inside one.
        card_index: Option<usize>,
    },
    Intersect {
        element: String,
        ratio: f64,
    },
    Input {
        field: String,
        value: String,
    },
    Blur {
        field: String,
    },
    Submit,
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PageEvent::Click(_) => EventKind::Click,
            PageEvent::Scroll { .. } => EventKind::Scroll,
            PageEvent::KeyDown { .. } => EventKind::KeyDown,
            PageEvent::Intersect { .. } => EventKind::Intersect,
            PageEvent::Input { .. } => EventKind::Input,
            PageEvent::Blur { .. } => EventKind::Blur,
            PageEvent::Submit => EventKind::Submit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_matches_variant() {
        assert_eq!(PageEvent::Submit.kind(), EventKind::Submit);
        assert_eq!(
            PageEvent::Click(ClickTarget::Elsewhere).kind(),
            EventKind::Click
        );
        assert_eq!(
            PageEvent::Blur {
                field: "email".into()
            }
            .kind(),
            EventKind::Blur
        );
    }

    #[test]
    fn nav_clicks_are_inside_nav() {
        assert!(ClickTarget::NavToggle.is_inside_nav());
        assert!(
            ClickTarget::NavLink {
                href: "#about".into(),
                target_top: None,
                page_y: 0.0,
                header_height: 0.0,
            }
            .is_inside_nav()
        );
        assert!(!ClickTarget::ChatButton.is_inside_nav());
    }
}
