//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and map onto the panel controls of the site
//! widget (open, minimize, restore, close) plus a few terminal helpers.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Open the panel (the floating chat button).
    Open,
    /// Minimize an open panel.
    Minimize,
    /// Restore a minimized panel.
    Restore,
    /// Hide the panel, keeping the transcript.
    Close,
    /// Print the transcript so far.
    History,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/open" => Some(ChatCommand::Open),
        "/minimize" | "/min" => Some(ChatCommand::Minimize),
        "/restore" => Some(ChatCommand::Restore),
        "/close" => Some(ChatCommand::Close),
        "/history" => Some(ChatCommand::History),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    for (name, what) in [
        ("/open    ", "Open the chat panel"),
        ("/minimize", "Minimize the panel"),
        ("/restore ", "Restore a minimized panel"),
        ("/close   ", "Close the panel (history is kept)"),
        ("/history ", "Show the conversation so far"),
        ("/clear   ", "Clear the screen"),
        ("/help    ", "Show this help message"),
        ("/exit    ", "End the chat session"),
    ] {
        println!("  {} {}", style(name).cyan(), what);
    }
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}
