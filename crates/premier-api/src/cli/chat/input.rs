//! Async readline input for the chat loop.
//!
//! Wraps `rustyline_async::Readline`, mapping Ctrl+D and Ctrl+C to
//! [`InputEvent`]s.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// A submitted line, untrimmed. The controller trims it.
    Line(String),
    /// End of file (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Returns the input handler and a `SharedWriter` that prints without
    /// clobbering the prompt.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                if !line.trim().is_empty() {
                    let _ = self.rl.add_history_entry(line.clone());
                }
                InputEvent::Line(line)
            }
            Ok(ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }

    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }
}
