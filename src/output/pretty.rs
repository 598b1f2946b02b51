use colored::Colorize;

use crate::focus::clock::render_progress_bar;
use crate::focus::{format_clock, format_minutes_label, Durations, Phase, SessionEngine};
use crate::output::SessionReport;

const BAR_WIDTH: usize = 30;

/// Format a session report as a multi-line block
pub fn format_report_pretty(report: &SessionReport) -> String {
    let state = &report.state;

    let (Some(title), Some(remaining)) = (&report.title, &report.remaining) else {
        return format!(
            "{}\n{}",
            "No active session.".dimmed(),
            format_durations_pretty(&report.durations)
        );
    };

    let title = match state.phase {
        Phase::OnBreak => title.green().bold(),
        _ => title.cyan().bold(),
    };

    let mut output = Vec::new();
    output.push(title.to_string());
    output.push("─".repeat(40));
    output.push(remaining.clone());
    output.push(format!(
        "{} {:.0}%",
        render_progress_bar(state.progress_percent, BAR_WIDTH),
        state.progress_percent
    ));
    output.push(format!(
        "{}  {}",
        "Elapsed:".dimmed(),
        format_clock(state.elapsed_seconds)
    ));
    output.push(format!(
        "{}  {}",
        "Phases completed:".dimmed(),
        report.phases_completed
    ));
    output.join("\n")
}

/// Format the duration controls, e.g. "Focus Duration: 25:00".
pub fn format_durations_pretty(durations: &Durations) -> String {
    format!(
        "{} {}\n{} {}",
        "Focus Duration:".bold(),
        format_minutes_label(durations.focus_minutes()),
        "Break Duration:".bold(),
        format_minutes_label(durations.break_minutes())
    )
}

/// One-line status for a live countdown.
pub fn format_status_line(engine: &SessionEngine) -> String {
    let state = engine.state();
    let Some(remaining) = engine.display_remaining() else {
        return "Stopped".dimmed().to_string();
    };

    let label = match state.phase {
        Phase::OnBreak => state.phase.label().green(),
        _ => state.phase.label().cyan(),
    };

    format!(
        "{label:<8}  {remaining}  {} {:>3.0}%",
        render_progress_bar(state.progress_percent, 20),
        state.progress_percent
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_report_idle() {
        plain();
        let engine = SessionEngine::new();
        let out = format_report_pretty(&SessionReport::from_engine(&engine, 0));

        assert!(out.contains("No active session."));
        assert!(out.contains("Focus Duration: 25:00"));
        assert!(out.contains("Break Duration: 05:00"));
    }

    #[test]
    fn test_format_report_running() {
        plain();
        let mut engine = SessionEngine::new();
        engine.start(5, 1);
        for _ in 0..150 {
            engine.tick();
        }
        let out = format_report_pretty(&SessionReport::from_engine(&engine, 0));

        assert!(out.starts_with("Focusing for 5 minutes"));
        assert!(out.contains("2:30 remaining"));
        assert!(out.contains("50%"));
        assert!(out.contains("Elapsed:  2:30"));
        assert!(out.contains("Phases completed:  0"));
    }

    #[test]
    fn test_format_status_line() {
        plain();
        let mut engine = SessionEngine::new();
        assert_eq!(format_status_line(&engine), "Stopped");

        engine.start(25, 5);
        let line = format_status_line(&engine);
        assert!(line.starts_with("Focusing"));
        assert!(line.contains("25:00 remaining"));
        assert!(line.ends_with("0%"));
    }
}
