//! Simulate command implementation.
//!
//! Drives a session through a number of ticks without sleeping and reports
//! where it ends up.

use crate::cli::args::{DurationArgs, OutputFormat};
use crate::cli::commands::session_durations;
use crate::config::Config;
use crate::error::PomoError;
use crate::focus::{Counter, SessionEngine};
use crate::output::{format_report, SessionReport};

/// Execute the simulate command.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn simulate(
    config: &Config,
    ticks: u64,
    durations: &DurationArgs,
    format: OutputFormat,
) -> Result<String, PomoError> {
    let report = simulate_report(config, ticks, durations);
    format_report(&report, format)
}

fn simulate_report(config: &Config, ticks: u64, durations: &DurationArgs) -> SessionReport {
    let mut engine = SessionEngine::with_durations(session_durations(config, durations));
    let counter = Counter::new();
    engine.subscribe(Box::new(counter.clone()));

    engine.start_configured();
    for _ in 0..ticks {
        engine.tick();
    }

    SessionReport::from_engine(&engine, counter.count())
}
