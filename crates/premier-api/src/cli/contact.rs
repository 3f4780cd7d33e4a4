//! `premier contact`: the contact form, one prompt per field.
//!
//! Input goes through the same `PageController` handlers as the site form:
//! each answer is an input event followed by a blur, so errors show inline
//! and the prompt repeats until the field is valid.

use std::sync::Arc;

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use premier_core::page::PageController;
use premier_types::form::{FieldKind, FieldSpec};

use super::page_view::TerminalPageView;

/// Subject choices as (label, submitted value). The first is the placeholder.
pub const SUBJECTS: [(&str, &str); 6] = [
    ("Select a subject", ""),
    ("General Inquiry", "general"),
    ("Account Services", "account"),
    ("Loans & Mortgages", "loans"),
    ("Investments", "investments"),
    ("Technical Support", "support"),
];

fn prompt_label(spec: &FieldSpec) -> String {
    if spec.required {
        spec.label.clone()
    } else {
        format!("{} (optional)", spec.label)
    }
}

fn prompt_field(theme: &ColorfulTheme, spec: &FieldSpec) -> anyhow::Result<String> {
    let label = prompt_label(spec);
    match spec.kind {
        FieldKind::Select => {
            let labels: Vec<&str> = SUBJECTS.iter().map(|(label, _)| *label).collect();
            let index = Select::with_theme(theme)
                .with_prompt(label)
                .items(&labels)
                .default(0)
                .interact()?;
            Ok(SUBJECTS[index].1.to_string())
        }
        _ => Ok(Input::<String>::with_theme(theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?),
    }
}

/// Prompt for every field, then run the (simulated) submission.
pub async fn run_contact(json: bool) -> anyhow::Result<()> {
    let view = Arc::new(TerminalPageView::new(json));
    let page = PageController::new(view);
    let theme = ColorfulTheme::default();

    if !json {
        println!();
        println!("  {}", style("Contact Premier Bank").cyan().bold());
        println!("  {}", style("We'll get back to you within 24 hours.").dim());
        println!();
    }

    let fields = page.form().fields().to_vec();
    for spec in &fields {
        loop {
            let value = prompt_field(&theme, spec)?;
            page.on_input(&spec.name, &value);
            page.on_blur(&spec.name);
            if page.form().error(&spec.name).is_none() {
                break;
            }
        }
    }

    let submission = page.submit_contact().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&submission.values)?);
    }
    Ok(())
}
