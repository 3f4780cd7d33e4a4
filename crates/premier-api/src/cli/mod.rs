//! CLI command definitions for the `premier` binary.
//!
//! Uses clap derive macros for argument parsing. Each subcommand drives one
//! widget from the terminal: the chat panel, the contact form, the stat
//! counters, or the development responder endpoint.

pub mod chat;
pub mod contact;
pub mod page_view;
pub mod stats;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use premier_types::config::WidgetConfig;

/// Premier Bank site widgets in the terminal.
#[derive(Parser)]
#[command(name = "premier", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    /// Path to premier.toml (defaults to the platform config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the chat panel in the terminal.
    Chat {
        /// Responder endpoint; without one the canned responder answers.
        #[arg(long, env = "PREMIER_CHAT_ENDPOINT")]
        endpoint: Option<String>,

        /// Page path reported with each message.
        #[arg(long)]
        page: Option<String>,
    },

    /// Run the development responder endpoint.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Artificial latency before each reply, in milliseconds.
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },

    /// Fill in the contact form.
    Contact,

    /// Play the stat counter animation.
    Stats {
        /// Counter to animate as NAME=TARGET (repeatable).
        #[arg(long = "counter", value_parser = parse_counter)]
        counters: Vec<(String, u64)>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Parse `NAME=TARGET` for `--counter`.
fn parse_counter(raw: &str) -> Result<(String, u64), String> {
    let (name, target) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=TARGET, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("counter name must not be empty".to_string());
    }
    let target = target
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid target '{target}': {e}"))?;
    Ok((name.to_string(), target))
}

/// Apply command-line overrides on top of the file configuration.
pub fn apply_overrides(
    mut config: WidgetConfig,
    endpoint: Option<String>,
    page: Option<String>,
) -> WidgetConfig {
    if let Some(endpoint) = endpoint {
        config.endpoint = Some(endpoint);
    }
    if let Some(page) = page {
        config.page = page;
    }
    config
}
