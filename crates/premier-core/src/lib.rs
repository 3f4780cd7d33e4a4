//! Business logic for the Premier Bank site widgets.
//!
//! This crate defines the "ports" the hosts implement (`ChatView`,
//! `PageView`, `EventSource`) and the logic driving them: the chat panel
//! controller, the responder abstraction with its canned implementation, and
//! the page handlers. It depends only on `premier-types` -- never on
//! `premier-infra` or any HTTP crate.

pub mod chat;
pub mod event;
pub mod page;
pub mod responder;
