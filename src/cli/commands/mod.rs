//! Command implementations for pomo.
//!
//! Each command returns the text to print on success.

mod completions;
mod config;
mod run;
mod simulate;

pub use completions::completions;
pub use config::config;
pub use run::run;
pub use simulate::simulate;

use log::warn;

use crate::cli::args::DurationArgs;
use crate::config::Config;
use crate::focus::Durations;

/// Durations for a session: command-line overrides on top of the stored config.
///
/// Overrides outside the allowed ranges are clamped, with a warning.
#[must_use]
pub fn session_durations(config: &Config, args: &DurationArgs) -> Durations {
    let stored = config.timer.durations();
    let durations = Durations::new(
        args.focus.unwrap_or_else(|| stored.focus_minutes()),
        args.break_minutes.unwrap_or_else(|| stored.break_minutes()),
    );

    if let Some(requested) = args.focus.filter(|&f| f != durations.focus_minutes()) {
        warn!(
            "focus duration {requested} out of range, using {}",
            durations.focus_minutes()
        );
    }
    if let Some(requested) = args.break_minutes.filter(|&b| b != durations.break_minutes()) {
        warn!(
            "break duration {requested} out of range, using {}",
            durations.break_minutes()
        );
    }

    durations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_durations_from_config() {
        let mut config = Config::default();
        config.timer.focus_minutes = 40;
        config.timer.break_minutes = 8;

        let durations = session_durations(&config, &DurationArgs::default());
        assert_eq!(durations, Durations::new(40, 8));
    }

    #[test]
    fn test_session_durations_overrides_and_clamps() {
        let config = Config::default();
        let args = DurationArgs {
            focus: Some(75),
            break_minutes: Some(3),
        };

        let durations = session_durations(&config, &args);
        assert_eq!(durations.focus_minutes(), 60);
        assert_eq!(durations.break_minutes(), 3);
    }
}
