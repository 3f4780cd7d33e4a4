//! Shared domain types for the Premier Bank site widgets.
//!
//! This crate contains the types used across the workspace: chat messages,
//! panel and modal visibility, the responder wire format, contact form
//! fields, notifications, configuration, and the error enums.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod form;
pub mod page;
pub mod panel;
pub mod wire;
