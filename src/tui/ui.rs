//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::focus::{format_minutes_label, Phase};
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: durations, session, progress, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Durations
            Constraint::Length(4), // Session
            Constraint::Length(3), // Progress
            Constraint::Min(0),
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_durations(frame, app, chunks[0]);
    render_session(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[4]);
}

fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Idle => Color::DarkGray,
        Phase::Focusing => Color::Cyan,
        Phase::OnBreak => Color::Green,
    }
}

/// Render the duration controls.
fn render_durations(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let durations = app.engine.durations();
    let locked = app.state().running;
    let value_style = if locked {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let line = Line::from(vec![
        Span::raw(" Focus Duration: "),
        Span::styled(format_minutes_label(durations.focus_minutes()), value_style),
        Span::raw("    Break Duration: "),
        Span::styled(format_minutes_label(durations.break_minutes()), value_style),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(header, area);
}

/// Render the session title and remaining time.
fn render_session(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.state();
    let color = phase_color(state.phase);

    let lines = match (app.engine.display_title(), app.engine.display_remaining()) {
        (Some(title), Some(remaining)) => vec![
            Line::from(Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(remaining),
        ],
        _ => vec![Line::from(Span::styled(
            "No active session",
            Style::default().fg(color),
        ))],
    };

    let session = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(session, area);
}

/// Render the progress bar for the current phase.
fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.state();
    if !state.is_active() {
        return;
    }

    let ratio = (state.progress_percent / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(phase_color(state.phase)))
        .ratio(ratio)
        .label(format!(
            "{:.0}%  ({} phase{} done)",
            state.progress_percent,
            app.phases_completed(),
            if app.phases_completed() == 1 { "" } else { "s" }
        ));

    frame.render_widget(gauge, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start | x:stop | +/-:focus | ]/[:break | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::Durations;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(60, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_idle() {
        let app = App::new(Durations::default());
        let screen = draw(&app);
        assert!(screen.contains("Focus Duration: 25:00"));
        assert!(screen.contains("Break Duration: 05:00"));
        assert!(screen.contains("No active session"));
    }

    #[test]
    fn test_render_running() {
        let mut app = App::new(Durations::default());
        app.start(std::time::Instant::now());
        let screen = draw(&app);
        assert!(screen.contains("Focusing for 25 minutes"));
        assert!(screen.contains("25:00 remaining"));
        assert!(screen.contains("0%"));
    }
}
