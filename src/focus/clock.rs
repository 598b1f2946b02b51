//! Clock-face formatting for countdown displays.

use chrono::Duration;

/// Format a number of seconds as `M:SS`.
///
/// Minutes are not padded and may exceed 59; seconds are always two digits.
#[must_use]
pub fn format_clock(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes}:{seconds:02}")
}

/// Format a chrono duration as `M:SS`.
#[must_use]
pub fn format_clock_duration(d: Duration) -> String {
    format_clock(d.num_seconds().unsigned_abs())
}

/// Format a whole-minute duration as the `MM:00` label used by the duration controls.
#[must_use]
pub fn format_minutes_label(minutes: u32) -> String {
    format!("{minutes:02}:00")
}

/// Format whole minutes as words, e.g. "25 minutes" or "1 minute".
#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
}

/// Render a progress bar for a percentage in `[0, 100]`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(percent: f64, width: usize) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
