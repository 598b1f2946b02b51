//! Application state for the TUI.

use std::time::Instant;

use crate::focus::{Counter, Durations, Phase, SessionEngine, SessionState, Ticker};

/// Application state.
pub struct App {
    /// The session being displayed.
    pub engine: SessionEngine,
    /// Tick driver; armed exactly while the engine runs.
    ticker: Ticker,
    /// Phase boundaries crossed in the current session.
    phases: Counter,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create an app around an idle engine with the given durations.
    #[must_use]
    pub fn new(durations: Durations) -> Self {
        Self::with_engine(SessionEngine::with_durations(durations))
    }

    /// Create an app around an existing engine.
    #[must_use]
    pub fn with_engine(mut engine: SessionEngine) -> Self {
        let phases = Counter::new();
        engine.subscribe(Box::new(phases.clone()));
        Self {
            engine,
            ticker: Ticker::new(),
            phases,
            status: Some("Press space to start, ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Current session snapshot.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.engine.state()
    }

    /// Phase boundaries crossed so far.
    #[must_use]
    pub fn phases_completed(&self) -> u64 {
        self.phases.count()
    }

    /// Start a session with the configured durations.
    pub fn start(&mut self, now: Instant) {
        if self.engine.is_running() {
            self.status = Some("Already running".to_string());
            return;
        }
        self.phases.reset();
        self.engine.start_configured();
        self.ticker.arm(now);
        self.status = self.engine.display_title();
    }

    /// Stop the session.
    pub fn stop(&mut self) {
        if !self.engine.is_running() {
            return;
        }
        self.engine.stop();
        self.ticker.cancel();
        self.status = Some("Stopped".to_string());
    }

    /// Apply any ticks that came due by `now`.
    pub fn on_time(&mut self, now: Instant) {
        for _ in 0..self.ticker.poll(now) {
            let before = self.engine.state().phase;
            let after = self.engine.tick().phase;
            if before != after {
                self.status = Some(match after {
                    Phase::OnBreak => "Time for a break!".to_string(),
                    _ => "Back to focus.".to_string(),
                });
            }
        }
        if !self.engine.is_running() {
            self.ticker.cancel();
        }
    }

    /// How long the event loop may wait before the next tick is due.
    #[must_use]
    pub fn time_until_tick(&self, now: Instant) -> Option<std::time::Duration> {
        self.ticker.time_until(now)
    }

    pub fn increment_focus(&mut self) {
        let changed = self.engine.increment_focus();
        self.report_edit(changed);
    }

    pub fn decrement_focus(&mut self) {
        let changed = self.engine.decrement_focus();
        self.report_edit(changed);
    }

    pub fn increment_break(&mut self) {
        let changed = self.engine.increment_break();
        self.report_edit(changed);
    }

    pub fn decrement_break(&mut self) {
        let changed = self.engine.decrement_break();
        self.report_edit(changed);
    }

    fn report_edit(&mut self, changed: bool) {
        self.status = if self.engine.is_running() {
            Some("Stop the session to change durations".to_string())
        } else if changed {
            None
        } else {
            Some("Limit reached".to_string())
        };
    }
}
