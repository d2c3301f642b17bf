// src/engine/apply.rs

//! Writing a finished run onto the display.
//!
//! Every outcome ends with the display showing something meaningful:
//! parsed fields on success, `Script not found` for a missing script, and
//! `Error` plus an escaped detail tooltip for everything else. Errors raised
//! by the display itself are logged and turned into the `Error` state.

use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::display::{ERROR_LABEL, IndicatorDisplay, NOT_FOUND_LABEL, escape_markup};
use crate::exec::{CommandResult, RunOutcome};
use crate::parse::{ParsedOutput, parse};

/// Apply one run outcome to `display`. Never fails.
pub fn apply_outcome<D>(display: &mut D, outcome: &RunOutcome)
where
    D: IndicatorDisplay + ?Sized,
{
    match outcome {
        RunOutcome::NotFound(path) => {
            info!(path = %path.display(), "command file does not exist");
            if let Err(e) = show_not_found(display) {
                error!(error = %e, "failed to show not-found state");
            }
        }
        RunOutcome::Finished(result) if result.is_success() => {
            let parsed = parse(&result.stdout);
            if let Err(e) = show_parsed(display, &parsed) {
                error!(error = %e, "error updating indicator from command output");
                show_error(display, &format!("Exception in command execution: {e:#}"));
            }
        }
        RunOutcome::Finished(result) => {
            let detail = failure_detail(result);
            warn!(exit_code = result.exit_code, stderr = %result.stderr, "{}", detail);
            show_error(display, &detail);
        }
    }
}

/// Tooltip text for a failed run, before escaping.
pub fn failure_detail(result: &CommandResult) -> String {
    format!("Command failed ({}): {}", result.exit_code, result.stderr)
}

fn show_not_found<D: IndicatorDisplay + ?Sized>(display: &mut D) -> Result<()> {
    display.set_label_markup(NOT_FOUND_LABEL)?;
    display.commit()
}

/// Absent or empty fields keep whatever the display showed before.
fn show_parsed<D: IndicatorDisplay + ?Sized>(display: &mut D, parsed: &ParsedOutput) -> Result<()> {
    if let Some(icon) = non_empty(&parsed.icon) {
        debug!(icon, "updating icon");
        display.set_icon(icon)?;
    }
    if let Some(text) = non_empty(&parsed.text) {
        debug!(text, "updating label");
        display.set_label_markup(text)?;
    }
    if let Some(tooltip) = non_empty(&parsed.tooltip) {
        debug!(tooltip, "updating tooltip");
        display.set_tooltip_markup(tooltip)?;
    }
    display.commit()
}

fn show_error<D: IndicatorDisplay + ?Sized>(display: &mut D, detail: &str) {
    if let Err(e) = try_show_error(display, detail) {
        error!(error = %e, "failed to show error state");
    }
}

fn try_show_error<D: IndicatorDisplay + ?Sized>(display: &mut D, detail: &str) -> Result<()> {
    display.set_label_markup(ERROR_LABEL)?;
    display.set_tooltip_markup(&escape_markup(detail))?;
    display.commit()
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
