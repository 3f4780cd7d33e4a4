//! `premier stats`: the hero counter animation in the terminal.

use std::sync::Arc;

use indicatif::MultiProgress;

use premier_core::page::counter::{format_count, run_counters};

use super::page_view::TerminalPageView;

/// Counters shown when none are given on the command line.
pub const DEFAULT_COUNTERS: [(&str, u64); 4] = [
    ("customers", 2_500_000),
    ("branches", 150),
    ("years", 75),
    ("loans", 48_000),
];

fn resolve_counters(counters: Vec<(String, u64)>) -> Vec<(String, u64)> {
    if counters.is_empty() {
        DEFAULT_COUNTERS
            .iter()
            .map(|(name, target)| (name.to_string(), *target))
            .collect()
    } else {
        counters
    }
}

/// Ramp every counter to its target, or print the final values with `--json`.
pub async fn run_stats(counters: Vec<(String, u64)>, json: bool) -> anyhow::Result<()> {
    let counters = resolve_counters(counters);

    if json {
        let finals: serde_json::Map<String, serde_json::Value> = counters
            .iter()
            .map(|(name, target)| (name.clone(), format_count(*target).into()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&finals)?);
        return Ok(());
    }

    println!();
    let multi = MultiProgress::new();
    let view = Arc::new(TerminalPageView::new(json).with_counters(&multi, &counters));
    run_counters(view.clone(), counters).await;
    view.finish_counters();
    println!();
    Ok(())
}
