//! Terminal rendering of the chat panel.
//!
//! `ChatRenderer` is the terminal's [`ChatView`]: bot replies are rendered as
//! markdown through `termimad`, the typing indicator becomes an `indicatif`
//! spinner, and panel transitions print a one-line status. With `--json`
//! every displayed message is printed as one JSON object per line instead.

use std::sync::Mutex;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use termimad::MadSkin;
use uuid::Uuid;

use premier_core::chat::ChatView;
use premier_types::chat::{Message, MessageRole};
use premier_types::panel::PanelVisibility;

pub struct ChatRenderer {
    skin: MadSkin,
    json: bool,
    /// Spinner standing in for the typing indicator, keyed by its message id.
    typing: Mutex<Option<(Uuid, ProgressBar)>>,
}

impl ChatRenderer {
    pub fn new(json: bool) -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(termimad::crossterm::style::Color::Cyan);
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);

        Self {
            skin,
            json,
            typing: Mutex::new(None),
        }
    }

    fn start_typing(&self, message: &Message) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(spinner_style);
        }
        spinner.set_message(message.text.clone());
        spinner.enable_steady_tick(Duration::from_millis(80));

        let previous = self
            .typing
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .replace((message.id, spinner));
        if let Some((_, old)) = previous {
            old.finish_and_clear();
        }
    }

    /// Render a bot reply as markdown.
    pub fn render_reply(&self, text: &str) -> String {
        format!("{}", self.skin.term_text(text))
    }
}

/// One JSON line for a displayed message.
pub fn json_line(message: &Message) -> String {
    serde_json::json!({
        "role": message.role,
        "text": message.text,
        "created_at": message.created_at.to_rfc3339(),
    })
    .to_string()
}

impl ChatView for ChatRenderer {
    fn mount(&self) {
        if !self.json {
            println!("  {}", style("Chat panel ready.").dim());
        }
    }

    fn append_message(&self, message: &Message) {
        if self.json {
            if !message.is_transient() {
                println!("{}", json_line(message));
            }
            return;
        }

        match message.role {
            // Readline already echoed what the visitor typed.
            MessageRole::User => {}
            MessageRole::Bot => {
                println!();
                println!("  {}", style("Premier >").cyan().bold());
                println!("{}", self.render_reply(&message.text).trim_end());
                println!();
            }
            MessageRole::Status => self.start_typing(message),
        }
    }

    fn remove_message(&self, id: Uuid) {
        let mut typing = self
            .typing
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if typing.as_ref().is_some_and(|(current, _)| *current == id) {
            if let Some((_, spinner)) = typing.take() {
                spinner.finish_and_clear();
            }
        }
    }

    fn set_visibility(&self, visibility: PanelVisibility) {
        if self.json {
            println!("{}", serde_json::json!({ "panel": visibility.to_string() }));
        } else {
            println!("  {}", style(format!("[panel {visibility}]")).dim());
        }
    }

    // The readline prompt always holds focus and is cleared on submit.
    fn focus_input(&self) {}

    fn clear_input(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_shape() {
        let message = Message::bot("Hi there");
        let value: serde_json::Value = serde_json::from_str(&json_line(&message)).unwrap();
        assert_eq!(value["role"], "bot");
        assert_eq!(value["text"], "Hi there");
        assert!(value["created_at"].as_str().is_some());
    }

    #[test]
    fn test_render_reply_keeps_text() {
        let renderer = ChatRenderer::new(false);
        let rendered = renderer.render_reply("Home loans start at **6.5%**");
        assert!(rendered.contains("Home loans start at"));
        assert!(rendered.contains("6.5%"));
    }

    #[test]
    fn test_removing_unknown_id_keeps_spinner() {
        let renderer = ChatRenderer::new(false);
        let status = Message::status("Assistant is typing...");
        renderer.start_typing(&status);

        renderer.remove_message(Uuid::now_v7());
        assert!(renderer.typing.lock().unwrap().is_some());

        renderer.remove_message(status.id);
        assert!(renderer.typing.lock().unwrap().is_none());
    }
}
