//! Terminal User Interface (TUI) for pomo.
//!
//! Shows the duration controls, the current phase with its remaining time,
//! and a progress bar. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::prelude::*;

use crate::config::Config;
use crate::error::PomoError;
use crate::focus::{Bell, SessionEngine};

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: &Config) -> Result<(), PomoError> {
    let mut engine = SessionEngine::with_durations(config.timer.durations());
    if config.notifications.bell {
        engine.subscribe(Box::new(Bell::stdout()));
    }
    let mut app = App::with_engine(engine);

    // Setup terminal
    enable_raw_mode().map_err(|e| PomoError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut terminal = restore_on_error(setup_terminal(), restore_terminal)?;

    info!("tui started");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Enter the alternate screen and wrap stdout in a ratatui terminal.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, PomoError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomoError::Terminal(format!("Failed to setup terminal: {e}")))?;

    Terminal::new(CrosstermBackend::new(stdout))
        .map_err(|e| PomoError::Terminal(format!("Failed to create terminal: {e}")))
}

/// Leave raw mode and the alternate screen after a failed setup.
fn restore_terminal() {
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen).ok();
}

/// Run `restore` when `result` is an error, then pass the result through.
fn restore_on_error<T>(result: Result<T, PomoError>, restore: impl FnOnce()) -> Result<T, PomoError> {
    if result.is_err() {
        restore();
    }
    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), PomoError> {
    while !app.should_quit {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomoError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(event::Action::Quit) = event::handle_events(app)? {
            app.stop();
            app.should_quit = true;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: Result<(), PomoError> = restore_on_error(
            Err(PomoError::Terminal("no tty".to_string())),
            || restored.set(true),
        );

        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let restored = Cell::new(false);
        let result = restore_on_error(Ok(7), || restored.set(true));

        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }
}
