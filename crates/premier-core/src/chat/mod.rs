//! Chat panel: view capability set and the controller that drives it.

pub mod controller;
pub mod view;

pub use controller::{ChatController, SubmitOutcome, FALLBACK_REPLY, TYPING_INDICATOR};
pub use view::ChatView;
