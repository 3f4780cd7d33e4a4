//! Interactive terminal chat panel.
//!
//! Drives the same `ChatController` the site widget uses, with the terminal
//! as its `ChatView`: styled replies, a spinner for the typing indicator,
//! slash commands for the panel controls. Entry point:
//! `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
