//! Focus and break duration settings.
//!
//! Both durations live on a bounded grid: focus runs 5..=60 minutes in steps
//! of 5, break runs 1..=15 minutes in steps of 1. Values outside the bounds
//! are clamped; stepping past a bound leaves the value unchanged.

use std::ops::RangeInclusive;

use serde::Serialize;

/// Allowed focus durations in minutes.
pub const FOCUS_RANGE: RangeInclusive<u32> = 5..=60;
/// Step used by the focus increment/decrement controls.
pub const FOCUS_STEP: u32 = 5;
/// Default focus duration in minutes.
pub const DEFAULT_FOCUS_MINUTES: u32 = 25;

/// Allowed break durations in minutes.
pub const BREAK_RANGE: RangeInclusive<u32> = 1..=15;
/// Step used by the break increment/decrement controls.
pub const BREAK_STEP: u32 = 1;
/// Default break duration in minutes.
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Configured phase lengths for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Durations {
    focus_minutes: u32,
    break_minutes: u32,
}

impl Durations {
    /// Build durations, clamping each value into its allowed range.
    #[must_use]
    pub fn new(focus_minutes: u32, break_minutes: u32) -> Self {
        Self {
            focus_minutes: clamp_focus(focus_minutes),
            break_minutes: clamp_break(break_minutes),
        }
    }

    #[must_use]
    pub const fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    #[must_use]
    pub const fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Focus phase length in seconds.
    #[must_use]
    pub const fn focus_seconds(&self) -> u32 {
        self.focus_minutes * 60
    }

    /// Break phase length in seconds.
    #[must_use]
    pub const fn break_seconds(&self) -> u32 {
        self.break_minutes * 60
    }

    pub fn set_focus_minutes(&mut self, minutes: u32) {
        self.focus_minutes = clamp_focus(minutes);
    }

    pub fn set_break_minutes(&mut self, minutes: u32) {
        self.break_minutes = clamp_break(minutes);
    }

    /// Raise focus by one step. Returns false if already at the maximum.
    pub fn increment_focus(&mut self) -> bool {
        step_up(&mut self.focus_minutes, FOCUS_STEP, &FOCUS_RANGE)
    }

    /// Lower focus by one step. Returns false if already at the minimum.
    pub fn decrement_focus(&mut self) -> bool {
        step_down(&mut self.focus_minutes, FOCUS_STEP, &FOCUS_RANGE)
    }

    /// Raise break by one step. Returns false if already at the maximum.
    pub fn increment_break(&mut self) -> bool {
        step_up(&mut self.break_minutes, BREAK_STEP, &BREAK_RANGE)
    }

    /// Lower break by one step. Returns false if already at the minimum.
    pub fn decrement_break(&mut self) -> bool {
        step_down(&mut self.break_minutes, BREAK_STEP, &BREAK_RANGE)
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

fn clamp_focus(minutes: u32) -> u32 {
    minutes.clamp(*FOCUS_RANGE.start(), *FOCUS_RANGE.end())
}

fn clamp_break(minutes: u32) -> u32 {
    minutes.clamp(*BREAK_RANGE.start(), *BREAK_RANGE.end())
}

// A step that would cross the bound is refused rather than clamped, so an
// off-grid value like 58 does not jump to 60 on increment.
fn step_up(value: &mut u32, step: u32, range: &RangeInclusive<u32>) -> bool {
    if *value + step > *range.end() {
        return false;
    }
    *value += step;
    true
}

fn step_down(value: &mut u32, step: u32, range: &RangeInclusive<u32>) -> bool {
    if *value < *range.start() + step {
        return false;
    }
    *value -= step;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let d = Durations::default();
        assert_eq!(d.focus_minutes(), 25);
        assert_eq!(d.break_minutes(), 5);
        assert_eq!(d.focus_seconds(), 1500);
        assert_eq!(d.break_seconds(), 300);
    }

    #[test]
    fn test_new_clamps() {
        let d = Durations::new(63, 0);
        assert_eq!(d.focus_minutes(), 60);
        assert_eq!(d.break_minutes(), 1);

        let d = Durations::new(2, 40);
        assert_eq!(d.focus_minutes(), 5);
        assert_eq!(d.break_minutes(), 15);
    }

    #[test]
    fn test_set_clamps() {
        let mut d = Durations::default();
        d.set_focus_minutes(63);
        assert_eq!(d.focus_minutes(), 60);
        d.set_focus_minutes(2);
        assert_eq!(d.focus_minutes(), 5);
        d.set_break_minutes(16);
        assert_eq!(d.break_minutes(), 15);
    }

    #[test]
    fn test_focus_steps_stop_at_bounds() {
        let mut d = Durations::new(55, 5);
        assert!(d.increment_focus());
        assert_eq!(d.focus_minutes(), 60);
        assert!(!d.increment_focus());
        assert_eq!(d.focus_minutes(), 60);

        let mut d = Durations::new(10, 5);
        assert!(d.decrement_focus());
        assert_eq!(d.focus_minutes(), 5);
        assert!(!d.decrement_focus());
        assert_eq!(d.focus_minutes(), 5);
    }

    #[test]
    fn test_break_steps_stop_at_bounds() {
        let mut d = Durations::new(25, 14);
        assert!(d.increment_break());
        assert!(!d.increment_break());
        assert_eq!(d.break_minutes(), 15);

        let mut d = Durations::new(25, 2);
        assert!(d.decrement_break());
        assert!(!d.decrement_break());
        assert_eq!(d.break_minutes(), 1);
    }

    #[test]
    fn test_off_grid_step_refused() {
        let mut d = Durations::new(58, 5);
        assert!(!d.increment_focus());
        assert_eq!(d.focus_minutes(), 58);
        assert!(d.decrement_focus());
        assert_eq!(d.focus_minutes(), 53);
    }
}
