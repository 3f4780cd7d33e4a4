//! Responder abstractions.
//!
//! - `Responder`: RPITIT trait for concrete responders
//! - `BoxResponder`: object-safe wrapper for runtime selection
//! - `CannedResponder`: local keyword-routed replies used when no endpoint is set

pub mod box_responder;
pub mod canned;
pub mod provider;

pub use box_responder::BoxResponder;
pub use canned::{CannedResponder, Topic};
pub use provider::Responder;
