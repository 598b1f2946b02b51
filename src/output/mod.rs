//! Output formatting for pomo.
//!
//! This module provides formatters for displaying session state in various formats.

mod json;
mod pretty;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::PomoError;
use crate::focus::{Durations, SessionEngine, SessionState};

pub use json::*;
pub use pretty::*;

/// Everything a renderer needs to show one moment of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    #[serde(flatten)]
    pub state: SessionState,
    pub durations: Durations,
    /// "Focusing for 25 minutes"; absent while idle.
    pub title: Option<String>,
    /// "24:59 remaining"; absent while idle.
    pub remaining: Option<String>,
    /// Phase boundaries crossed so far.
    pub phases_completed: u64,
}

impl SessionReport {
    /// Capture the engine's current state.
    #[must_use]
    pub fn from_engine(engine: &SessionEngine, phases_completed: u64) -> Self {
        Self {
            state: engine.state(),
            durations: engine.durations(),
            title: engine.display_title(),
            remaining: engine.display_remaining(),
            phases_completed,
        }
    }
}

/// Format a session report based on output format
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_report(report: &SessionReport, format: OutputFormat) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_report_pretty(report)),
        OutputFormat::Json => format_report_json(report),
    }
}

/// Format configured durations based on output format
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_durations(durations: &Durations, format: OutputFormat) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_durations_pretty(durations)),
        OutputFormat::Json => to_json(durations),
    }
}
