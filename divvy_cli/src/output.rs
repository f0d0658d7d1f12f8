use anyhow::{Context, Result};
use divvy_db::Outcome;

use crate::config::OutputFormat;

/// Renders an outcome as the lines the user sees. `Done` and `Quit` print nothing.
pub fn render(outcome: &Outcome, format: OutputFormat, precision: usize) -> Result<Vec<String>> {
    match format {
        OutputFormat::Json => render_json(outcome),
        OutputFormat::Text => Ok(render_text(outcome, precision)),
    }
}

fn render_json(outcome: &Outcome) -> Result<Vec<String>> {
    if matches!(outcome, Outcome::Done | Outcome::Quit) {
        return Ok(vec![]);
    }
    let line = serde_json::to_string(outcome).context("Failed to serialize outcome")?;
    Ok(vec![line])
}

fn render_text(outcome: &Outcome, precision: usize) -> Vec<String> {
    match outcome {
        Outcome::Done | Outcome::Quit => vec![],
        Outcome::Groups { names } | Outcome::Users { names } | Outcome::UnderPaid { names } => {
            names.clone()
        }
        Outcome::Balance { user, balance } => {
            vec![format!("{balance:.precision$} of {user}")]
        }
        Outcome::Transactions { entries } => entries
            .iter()
            .map(|xct| format!("{} transaction: {:.precision$}", xct.user, xct.amount))
            .collect(),
    }
}
