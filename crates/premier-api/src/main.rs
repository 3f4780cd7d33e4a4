//! Premier Bank site widgets CLI and development endpoint.
//!
//! Binary name: `premier`
//!
//! Parses CLI arguments, loads `premier.toml`, installs tracing, then
//! dispatches to the chat panel, the contact form, the counter demo, or the
//! development responder endpoint.

mod cli;
mod http;
mod state;

use std::time::Duration;

use clap::Parser;
use clap_complete::generate;

use premier_core::responder::{BoxResponder, CannedResponder};
use premier_infra::config::resolve_widget_config;
use premier_observe::tracing_setup::{init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need config or tracing
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "premier", &mut std::io::stdout());
        return Ok(());
    }

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,premier=debug",
        _ => "trace",
    };
    init_tracing(filter, cli.json, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let config = resolve_widget_config(cli.config.as_deref()).await;

    let result = match cli.command {
        Commands::Chat { endpoint, page } => {
            let config = cli::apply_overrides(config, endpoint, page);
            cli::chat::loop_runner::run_chat_loop(&config, cli.json).await
        }

        Commands::Serve {
            port,
            host,
            delay_ms,
        } => serve(&host, port, delay_ms).await,

        Commands::Contact => cli::contact::run_contact(cli.json).await,

        Commands::Stats { counters } => cli::stats::run_stats(counters, cli.json).await,

        Commands::Completions { .. } => unreachable!("handled above"),
    };

    shutdown_tracing();
    result
}

/// Run the development responder endpoint until Ctrl+C.
async fn serve(host: &str, port: u16, delay_ms: u64) -> anyhow::Result<()> {
    let responder = BoxResponder::new(CannedResponder::new(Duration::from_millis(delay_ms)));
    let state = AppState::new(responder);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "development responder listening");

    println!(
        "  {} Premier chat endpoint listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}/api/chat")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
