//! Phase-complete notifications.
//!
//! The engine never plays sounds itself. It hands each [`PhaseComplete`] to
//! the listeners a host subscribed, such as the terminal [`Bell`].

use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;

use log::warn;

use crate::focus::session::PhaseComplete;

/// Receives one call per phase boundary.
#[cfg_attr(test, mockall::automock)]
pub trait PhaseListener {
    fn phase_complete(&mut self, event: &PhaseComplete);
}

/// Rings the terminal bell on every phase boundary.
pub struct Bell<W: Write> {
    out: W,
}

impl Bell<std::io::Stdout> {
    /// A bell writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Bell<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the bell and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PhaseListener for Bell<W> {
    fn phase_complete(&mut self, event: &PhaseComplete) {
        let rung = self.out.write_all(b"\x07").and_then(|()| self.out.flush());
        if let Err(e) = rung {
            // Bell failures are logged, never propagated.
            warn!("failed to ring bell for {}: {e}", event.completed);
        }
    }
}

/// Counts notifications; clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    count: Rc<Cell<u64>>,
}

impl Counter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications seen so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count.get()
    }

    /// Reset the shared count to zero.
    pub fn reset(&self) {
        self.count.set(0);
    }
}

impl PhaseListener for Counter {
    fn phase_complete(&mut self, _event: &PhaseComplete) {
        self.count.set(self.count.get() + 1);
    }
}
