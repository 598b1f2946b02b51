//! One-second tick driver.
//!
//! The ticker holds at most one pending deadline. Callers pass the current
//! instant in, which keeps the driver deterministic under test.

use std::time::{Duration, Instant};

/// Fixed cadence of the session clock.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Schedules ticks for a running session.
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    next: Option<Instant>,
}

impl Ticker {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: None }
    }

    /// Schedule the next tick one period from `now`, unless one is already pending.
    pub fn arm(&mut self, now: Instant) {
        if self.next.is_none() {
            self.next = Some(now + TICK_PERIOD);
        }
    }

    /// Drop the pending tick, if any.
    pub fn cancel(&mut self) {
        self.next = None;
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// Number of ticks due at `now`.
    ///
    /// Each due tick advances the deadline by one period, so a late poll
    /// catches up instead of dropping seconds. A cancelled ticker reports 0.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut deadline) = self.next else {
            return 0;
        };

        let mut due = 0;
        while deadline <= now {
            due += 1;
            deadline += TICK_PERIOD;
        }
        self.next = Some(deadline);
        due
    }

    /// Time until the pending tick, or `None` when nothing is scheduled.
    #[must_use]
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.next.map(|deadline| deadline.saturating_duration_since(now))
    }
}
