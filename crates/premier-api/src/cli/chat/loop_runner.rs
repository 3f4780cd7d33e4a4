//! Main chat loop orchestration.
//!
//! Builds the responder from configuration, opens the panel, then feeds
//! every typed line either to a slash command or to
//! `ChatController::submit_message`.

use std::sync::Arc;

use console::style;
use tracing::{Instrument, field, info, info_span};

use premier_core::chat::{ChatController, SubmitOutcome};
use premier_infra::responder::create_responder;
use premier_observe::attrs;
use premier_types::chat::MessageRole;
use premier_types::config::WidgetConfig;
use premier_types::panel::PanelVisibility;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

fn outcome_label(outcome: SubmitOutcome) -> &'static str {
    match outcome {
        SubmitOutcome::Ignored => attrs::OUTCOME_IGNORED,
        SubmitOutcome::Replied => attrs::OUTCOME_REPLIED,
        SubmitOutcome::FellBack => attrs::OUTCOME_FELL_BACK,
    }
}

fn print_history(chat: &ChatController) {
    let transcript = chat.transcript();
    println!();
    if transcript.is_empty() {
        println!("  {}", style("No messages yet.").dim());
    }
    for message in &transcript {
        let label = match message.role {
            MessageRole::User => format!("{}", style("You").green()),
            MessageRole::Bot => format!("{}", style("Premier").cyan()),
            MessageRole::Status => continue,
        };
        let preview = if message.text.chars().count() > 100 {
            format!("{}...", message.text.chars().take(97).collect::<String>())
        } else {
            message.text.clone()
        };
        println!(
            "  {} {} {}",
            style(message.created_at.format("%H:%M:%S")).dim(),
            style(label).bold(),
            preview.replace('\n', " ")
        );
    }
    println!();
}

/// Run the interactive chat panel until Ctrl+D or `/exit`.
pub async fn run_chat_loop(config: &WidgetConfig, json: bool) -> anyhow::Result<()> {
    let responder = create_responder(config)?;
    let view = Arc::new(ChatRenderer::new(json));
    let chat = ChatController::new(view, responder, config.focus_delay());

    if !json {
        print_welcome_banner(chat.responder_name(), &config.page, config.endpoint());
    }
    chat.open_panel();
    info!(responder = chat.responder_name(), page = %config.page, "chat panel started");

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) =
        ChatInput::new(prompt).map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                chat.close();
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
            }
            InputEvent::Line(line) => {
                if let Some(cmd) = commands::parse(&line) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::Clear => chat_input.clear(),
                        ChatCommand::Exit => {
                            chat.close();
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Open => chat.open_panel(),
                        ChatCommand::Minimize => {
                            chat.minimize();
                        }
                        ChatCommand::Restore => {
                            chat.restore();
                        }
                        ChatCommand::Close => {
                            chat.close();
                        }
                        ChatCommand::History => print_history(&chat),
                        ChatCommand::Unknown(name) => println!(
                            "\n  {} Unknown command: {}. Type /help for available commands.\n",
                            style("?").yellow().bold(),
                            style(name).dim()
                        ),
                    }
                    continue;
                }

                if chat.visibility() != PanelVisibility::Open {
                    println!(
                        "  {} The panel is {}. Type /open or /restore to keep chatting.",
                        style("!").yellow().bold(),
                        chat.visibility()
                    );
                    continue;
                }

                let span = info_span!(
                    "chat_submit",
                    chat.responder = chat.responder_name(),
                    chat.message_len = line.trim().len(),
                    chat.outcome = field::Empty,
                );
                let outcome = chat
                    .submit_message(&line)
                    .instrument(span.clone())
                    .await;
                span.record(attrs::CHAT_OUTCOME, outcome_label(outcome));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels_are_distinct() {
        let labels = [
            outcome_label(SubmitOutcome::Ignored),
            outcome_label(SubmitOutcome::Replied),
            outcome_label(SubmitOutcome::FellBack),
        ];
        assert_eq!(labels, ["ignored", "replied", "fell_back"]);
    }
}
