//! Event handling for the TUI.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomoError;
use crate::tui::app::App;

/// Longest the loop blocks waiting for input when no tick is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
}

const HELP: &str = "space:start | x:stop | +/-:focus | ]/[:break | q:quit";

/// Wait for input until the next tick is due, then apply due ticks.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, PomoError> {
    let timeout = app
        .time_until_tick(Instant::now())
        .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));

    let mut action = None;
    if event::poll(timeout).map_err(|e| PomoError::Terminal(format!("Event poll failed: {e}")))? {
        if let Event::Key(key) =
            event::read().map_err(|e| PomoError::Terminal(format!("Event read failed: {e}")))?
        {
            action = handle_key(app, key, Instant::now());
        }
    }

    app.on_time(Instant::now());
    Ok(action)
}

/// Apply a single key press.
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),

        KeyCode::Char(' ' | 's') | KeyCode::Enter => app.start(now),
        KeyCode::Char('x') => app.stop(),

        KeyCode::Char('+' | '=') | KeyCode::Up => app.increment_focus(),
        KeyCode::Char('-') | KeyCode::Down => app.decrement_focus(),
        KeyCode::Char(']') | KeyCode::Right => app.increment_break(),
        KeyCode::Char('[') | KeyCode::Left => app.decrement_break(),

        KeyCode::Char('?') => app.status = Some(HELP.to_string()),

        _ => {}
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::{Durations, Phase};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Durations::default());
        let now = Instant::now();
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('q')), now), Some(Action::Quit));
        assert_eq!(handle_key(&mut app, press(KeyCode::Esc), now), Some(Action::Quit));
        assert_eq!(
            handle_key(
                &mut app,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                now
            ),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_start_and_stop_keys() {
        let mut app = App::new(Durations::default());
        let now = Instant::now();

        assert!(handle_key(&mut app, press(KeyCode::Char(' ')), now).is_none());
        assert_eq!(app.state().phase, Phase::Focusing);

        handle_key(&mut app, press(KeyCode::Char('x')), now);
        assert_eq!(app.state().phase, Phase::Idle);
    }

    #[test]
    fn test_duration_keys() {
        let mut app = App::new(Durations::default());
        let now = Instant::now();

        handle_key(&mut app, press(KeyCode::Char('+')), now);
        handle_key(&mut app, press(KeyCode::Char('[')), now);
        assert_eq!(app.engine.durations(), Durations::new(30, 4));
    }

    #[test]
    fn test_help_key() {
        let mut app = App::new(Durations::default());
        handle_key(&mut app, press(KeyCode::Char('?')), Instant::now());
        assert_eq!(app.status.as_deref(), Some(HELP));
    }
}
