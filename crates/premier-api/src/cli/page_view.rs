//! Terminal rendering of the page handlers.
//!
//! Counters become `indicatif` bars, field errors and notifications are
//! printed inline, and the submit spinner stands in for the disabled
//! "Sending..." button.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use console::style;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use premier_core::page::counter::RAMP_STEPS;
use premier_core::page::{PageView, SENDING_LABEL};
use premier_types::form::FieldError;
use premier_types::page::{Notification, NotificationKind};

#[derive(Default)]
pub struct TerminalPageView {
    json: bool,
    counters: HashMap<String, ProgressBar>,
    sending: Mutex<Option<ProgressBar>>,
}

impl TerminalPageView {
    pub fn new(json: bool) -> Self {
        Self {
            json,
            ..Default::default()
        }
    }

    /// Add one progress bar per counter under `multi`.
    pub fn with_counters(mut self, multi: &MultiProgress, counters: &[(String, u64)]) -> Self {
        for (name, _) in counters {
            let bar = multi.add(ProgressBar::new(u64::from(RAMP_STEPS)));
            if let Ok(bar_style) =
                ProgressStyle::default_bar().template("  {prefix:>12.bold} {bar:30.cyan/blue} {msg}")
            {
                bar.set_style(bar_style);
            }
            bar.set_prefix(name.clone());
            bar.set_message("0+");
            self.counters.insert(name.clone(), bar);
        }
        self
    }

    pub fn finish_counters(&self) {
        for bar in self.counters.values() {
            bar.finish();
        }
    }
}

impl PageView for TerminalPageView {
    fn set_counter_text(&self, counter: &str, text: &str) {
        if let Some(bar) = self.counters.get(counter) {
            bar.inc(1);
            bar.set_message(text.to_string());
        }
    }

    fn show_field_error(&self, field: &str, error: &FieldError) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "field": field, "error": error.to_string() }));
        } else {
            println!("    {} {}", style("✗").red().bold(), style(error).red());
        }
    }

    fn set_submit_busy(&self, busy: bool) {
        let mut sending = self.sending.lock().unwrap_or_else(PoisonError::into_inner);
        if busy {
            let spinner = ProgressBar::new_spinner();
            if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
                spinner.set_style(spinner_style);
            }
            spinner.set_message(SENDING_LABEL);
            spinner.enable_steady_tick(Duration::from_millis(80));
            *sending = Some(spinner);
        } else if let Some(spinner) = sending.take() {
            spinner.finish_and_clear();
        }
    }

    fn show_notification(&self, notification: &Notification) {
        if self.json {
            return;
        }
        let marker = match notification.kind {
            NotificationKind::Success => style("✓").green().bold(),
            NotificationKind::Error => style("!").red().bold(),
            NotificationKind::Info => style("i").cyan().bold(),
        };
        println!();
        println!("  {marker} {}", notification.message);
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_updates_track_ramp() {
        let multi = MultiProgress::with_draw_target(indicatif::ProgressDrawTarget::hidden());
        let view = TerminalPageView::new(false)
            .with_counters(&multi, &[("customers".to_string(), 2_500_000)]);

        view.set_counter_text("customers", "25K+");
        view.set_counter_text("customers", "50K+");
        view.set_counter_text("unknown", "1+");

        let bar = &view.counters["customers"];
        assert_eq!(bar.position(), 2);
        assert_eq!(bar.message(), "50K+");
    }

    #[test]
    fn test_submit_busy_toggles_spinner() {
        let view = TerminalPageView::new(true);
        view.set_submit_busy(true);
        assert!(view.sending.lock().unwrap().is_some());
        view.set_submit_busy(false);
        assert!(view.sending.lock().unwrap().is_none());
    }
}
