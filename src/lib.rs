//! pomo - a focus/break countdown timer
//!
//! This crate provides a session engine that alternates between a focus
//! phase and a break phase, plus a command-line and terminal UI around it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod focus;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomoError;
pub use focus::{Phase, SessionEngine, SessionState};
