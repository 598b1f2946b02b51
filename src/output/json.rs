//! JSON output formatting for pomo.

use serde::Serialize;

use crate::error::PomoError;
use crate::output::SessionReport;

/// Format a session report as JSON
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_report_json(report: &SessionReport) -> Result<String, PomoError> {
    to_json(report)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomoError> {
    Ok(serde_json::to_string_pretty(value)?)
}
