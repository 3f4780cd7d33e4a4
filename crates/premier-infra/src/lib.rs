//! Infrastructure layer for the Premier Bank site widgets.
//!
//! Contains the implementations that touch the outside world: the HTTP
//! responder that forwards chat text to a configured endpoint, the responder
//! factory, and the `premier.toml` loader.

pub mod config;
pub mod responder;
