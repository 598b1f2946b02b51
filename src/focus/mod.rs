//! Focus/break session timing.
//!
//! - Clock-face formatting of remaining time
//! - Duration settings with bounded steps
//! - The session state machine and its engine
//! - Phase-complete notifications
//! - The one-second tick driver

pub mod clock;
pub mod engine;
pub mod notify;
pub mod session;
pub mod settings;
pub mod ticker;

pub use clock::{format_clock, format_clock_duration, format_minutes, format_minutes_label};
pub use engine::SessionEngine;
pub use notify::{Bell, Counter, PhaseListener};
pub use session::{Phase, PhaseComplete, SessionState};
pub use settings::Durations;
pub use ticker::{Ticker, TICK_PERIOD};
