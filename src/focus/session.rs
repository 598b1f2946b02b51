//! Session state and the pure tick transition.
//!
//! A [`SessionState`] is an immutable snapshot. Every operation produces a
//! whole new snapshot, so the phase, remaining time and progress read from
//! one value always agree with each other.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::focus::settings::Durations;

/// Which segment of a session is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No session is active.
    Idle,
    /// Counting down the focus duration.
    Focusing,
    /// Counting down the break duration.
    OnBreak,
}

impl Phase {
    /// Display label for this phase.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Focusing => "Focusing",
            Self::OnBreak => "On Break",
        }
    }

    /// The phase that follows this one when it completes.
    ///
    /// Idle has no successor and maps to itself.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Focusing => Self::OnBreak,
            Self::OnBreak => Self::Focusing,
        }
    }

    /// Configured length of this phase in whole minutes.
    #[must_use]
    pub const fn minutes(&self, durations: &Durations) -> u32 {
        match self {
            Self::Idle => 0,
            Self::Focusing => durations.focus_minutes(),
            Self::OnBreak => durations.break_minutes(),
        }
    }

    /// Configured length of this phase in seconds.
    #[must_use]
    pub const fn seconds(&self, durations: &Durations) -> u32 {
        self.minutes(durations) * 60
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A boundary crossing produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseComplete {
    /// The phase that just ran out.
    pub completed: Phase,
    /// The phase the session moved into.
    pub next: Phase,
    /// Session elapsed seconds at the moment of the swap, before the tick's own second.
    pub elapsed_seconds: u64,
}

/// Snapshot of the engine's session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionState {
    pub phase: Phase,
    /// Seconds left in the current phase; 0 while idle.
    pub remaining_seconds: u32,
    pub running: bool,
    /// Seconds ticked since the session started.
    pub elapsed_seconds: u64,
    /// Share of the current phase already elapsed, in `[0, 100]`.
    pub progress_percent: f64,
}

impl SessionState {
    /// The idle state: no session.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            remaining_seconds: 0,
            running: false,
            elapsed_seconds: 0,
            progress_percent: 0.0,
        }
    }

    /// A freshly started session at the top of its focus phase.
    #[must_use]
    pub const fn started(durations: &Durations) -> Self {
        Self {
            phase: Phase::Focusing,
            remaining_seconds: durations.focus_seconds(),
            running: true,
            elapsed_seconds: 0,
            progress_percent: 0.0,
        }
    }

    /// Whether a session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Elapsed session time as a chrono duration.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::seconds(i64::try_from(self.elapsed_seconds).unwrap_or(i64::MAX))
    }

    /// Advance by one second.
    ///
    /// A phase whose remaining time reached zero on the previous tick is
    /// swapped first, then the (possibly new) phase is decremented, so the
    /// `0:00` state is observable for exactly one tick. Not running is a
    /// no-op.
    #[must_use]
    pub fn advance(&self, durations: &Durations) -> (Self, Option<PhaseComplete>) {
        if !self.running || self.phase == Phase::Idle {
            return (*self, None);
        }

        let mut phase = self.phase;
        let mut remaining = self.remaining_seconds;
        let mut event = None;

        if remaining == 0 {
            let next = phase.next();
            event = Some(PhaseComplete {
                completed: phase,
                next,
                elapsed_seconds: self.elapsed_seconds,
            });
            phase = next;
            remaining = next.seconds(durations);
        }

        let remaining = remaining.saturating_sub(1);
        let next = Self {
            phase,
            remaining_seconds: remaining,
            running: true,
            elapsed_seconds: self.elapsed_seconds.saturating_add(1),
            progress_percent: progress_percent(phase.seconds(durations), remaining),
        };

        (next, event)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::idle()
    }
}

/// `100 * (total - remaining) / total`, with an empty phase treated as 0%.
#[must_use]
pub fn progress_percent(total_seconds: u32, remaining_seconds: u32) -> f64 {
    if total_seconds == 0 {
        return 0.0;
    }
    let done = total_seconds.saturating_sub(remaining_seconds);
    100.0 * f64::from(done) / f64::from(total_seconds)
}
