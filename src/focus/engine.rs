//! The session engine.
//!
//! Owns the current [`SessionState`] and the configured [`Durations`], applies
//! the tick transition, and forwards phase-complete events to subscribers.
//! Calls that are not valid in the current state (starting twice, ticking
//! while idle, editing durations mid-session) are ignored; callers observe
//! the outcome through the returned snapshot.

use log::{debug, trace};

use crate::focus::clock::{format_clock, format_minutes};
use crate::focus::notify::PhaseListener;
use crate::focus::session::{Phase, SessionState};
use crate::focus::settings::Durations;

/// Drives a single focus/break session.
pub struct SessionEngine {
    state: SessionState,
    durations: Durations,
    listeners: Vec<Box<dyn PhaseListener>>,
}

impl SessionEngine {
    /// Create an idle engine with default durations.
    #[must_use]
    pub fn new() -> Self {
        Self::with_durations(Durations::default())
    }

    /// Create an idle engine with the given durations.
    #[must_use]
    pub fn with_durations(durations: Durations) -> Self {
        Self {
            state: SessionState::idle(),
            durations,
            listeners: Vec::new(),
        }
    }

    /// Register a listener for phase-complete events.
    pub fn subscribe(&mut self, listener: Box<dyn PhaseListener>) {
        self.listeners.push(listener);
    }

    /// Current snapshot.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Currently configured durations.
    #[must_use]
    pub const fn durations(&self) -> Durations {
        self.durations
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.running
    }

    /// Start a session with the given durations.
    ///
    /// Ignored while a session is already running.
    pub fn start(&mut self, focus_minutes: u32, break_minutes: u32) -> SessionState {
        if self.state.running {
            debug!("start ignored: session already running");
            return self.state;
        }
        self.durations = Durations::new(focus_minutes, break_minutes);
        self.begin()
    }

    /// Start a session with the stored durations.
    pub fn start_configured(&mut self) -> SessionState {
        if self.state.running {
            debug!("start ignored: session already running");
            return self.state;
        }
        self.begin()
    }

    fn begin(&mut self) -> SessionState {
        self.state = SessionState::started(&self.durations);
        debug!(
            "session started: focus {}m, break {}m",
            self.durations.focus_minutes(),
            self.durations.break_minutes()
        );
        self.state
    }

    /// End the session and return to idle.
    pub fn stop(&mut self) -> SessionState {
        if self.state.is_active() {
            debug!(
                "session stopped after {}s in {}",
                self.state.elapsed_seconds, self.state.phase
            );
        }
        self.state = SessionState::idle();
        self.state
    }

    /// Advance the session by one second.
    ///
    /// Ignored when not running. Listeners are notified after the new state
    /// is in place.
    pub fn tick(&mut self) -> SessionState {
        let (next, event) = self.state.advance(&self.durations);
        self.state = next;

        if let Some(event) = event {
            debug!(
                "{} complete after {}s, now {}",
                event.completed, event.elapsed_seconds, event.next
            );
            for listener in &mut self.listeners {
                listener.phase_complete(&event);
            }
        } else if next.running {
            trace!("tick: {} {}s left", next.phase, next.remaining_seconds);
        }

        self.state
    }

    /// Set the focus duration. Only effective while idle; clamps to 5..=60.
    pub fn set_focus_minutes(&mut self, minutes: u32) {
        if self.edit_allowed() {
            self.durations.set_focus_minutes(minutes);
        }
    }

    /// Set the break duration. Only effective while idle; clamps to 1..=15.
    pub fn set_break_minutes(&mut self, minutes: u32) {
        if self.edit_allowed() {
            self.durations.set_break_minutes(minutes);
        }
    }

    pub fn increment_focus(&mut self) -> bool {
        self.edit_allowed() && self.durations.increment_focus()
    }

    pub fn decrement_focus(&mut self) -> bool {
        self.edit_allowed() && self.durations.decrement_focus()
    }

    pub fn increment_break(&mut self) -> bool {
        self.edit_allowed() && self.durations.increment_break()
    }

    pub fn decrement_break(&mut self) -> bool {
        self.edit_allowed() && self.durations.decrement_break()
    }

    fn edit_allowed(&self) -> bool {
        if self.state.running {
            debug!("duration change ignored: session running");
            return false;
        }
        true
    }

    /// Heading for the current phase, e.g. "Focusing for 25 minutes".
    ///
    /// `None` while idle.
    #[must_use]
    pub fn display_title(&self) -> Option<String> {
        match self.state.phase {
            Phase::Idle => None,
            phase => Some(format!(
                "{} for {}",
                phase.label(),
                format_minutes(phase.minutes(&self.durations))
            )),
        }
    }

    /// Remaining time line, e.g. "24:59 remaining".
    ///
    /// `None` while idle.
    #[must_use]
    pub fn display_remaining(&self) -> Option<String> {
        self.state.is_active().then(|| {
            format!(
                "{} remaining",
                format_clock(u64::from(self.state.remaining_seconds))
            )
        })
    }
}

impl Default for SessionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEngine")
            .field("state", &self.state)
            .field("durations", &self.durations)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
