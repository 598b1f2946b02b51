//! Config command implementation.
//!
//! Shows and edits the stored focus/break durations.

use colored::Colorize;

use crate::cli::args::{Adjustment, ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::PomoError;
use crate::focus::settings::{BREAK_RANGE, FOCUS_RANGE};
use crate::focus::Durations;
use crate::output::{format_durations, to_json};

/// Which stored duration a command edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Focus,
    Break,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written, or the
/// requested value cannot be parsed.
pub fn config(
    paths: &Paths,
    config: &Config,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match cmd {
        ConfigCommands::Show => show(config, format),
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
        ConfigCommands::Focus { value } => adjust(paths, config, Target::Focus, &value, format),
        ConfigCommands::Break { value } => adjust(paths, config, Target::Break, &value, format),
    }
}

fn show(config: &Config, format: OutputFormat) -> Result<String, PomoError> {
    match format {
        OutputFormat::Json => to_json(config),
        OutputFormat::Pretty => {
            let mut output = vec![format_durations(&config.timer.durations(), format)?];
            output.push(format!(
                "{} {}",
                "Bell:".bold(),
                if config.notifications.bell { "on" } else { "off" }
            ));
            Ok(output.join("\n"))
        }
    }
}

fn adjust(
    paths: &Paths,
    config: &Config,
    target: Target,
    value: &str,
    format: OutputFormat,
) -> Result<String, PomoError> {
    let adjustment = Adjustment::parse(value).ok_or_else(|| {
        PomoError::InvalidArgument(format!("expected 'up', 'down' or minutes, got '{value}'"))
    })?;

    let mut durations = config.timer.durations();
    let changed = apply(&mut durations, target, adjustment);

    let mut updated = config.clone();
    updated.timer.set_durations(durations);
    paths.ensure_dirs()?;
    updated.save_to_path(&paths.config_file)?;

    let rendered = format_durations(&durations, format)?;
    if changed || format == OutputFormat::Json {
        return Ok(rendered);
    }

    let (name, range) = match target {
        Target::Focus => ("Focus", FOCUS_RANGE),
        Target::Break => ("Break", BREAK_RANGE),
    };
    Ok(format!(
        "{}\n{}",
        rendered,
        format!(
            "{name} duration unchanged (allowed {}-{} minutes)",
            range.start(),
            range.end()
        )
        .yellow()
    ))
}

/// Apply an adjustment, returning whether the value changed.
fn apply(durations: &mut Durations, target: Target, adjustment: Adjustment) -> bool {
    let before = *durations;
    match (target, adjustment) {
        (Target::Focus, Adjustment::Up) => {
            durations.increment_focus();
        }
        (Target::Focus, Adjustment::Down) => {
            durations.decrement_focus();
        }
        (Target::Focus, Adjustment::Set(minutes)) => durations.set_focus_minutes(minutes),
        (Target::Break, Adjustment::Up) => {
            durations.increment_break();
        }
        (Target::Break, Adjustment::Down) => {
            durations.decrement_break();
        }
        (Target::Break, Adjustment::Set(minutes)) => durations.set_break_minutes(minutes),
    }
    *durations != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_apply_steps() {
        let mut d = Durations::default();
        assert!(apply(&mut d, Target::Focus, Adjustment::Up));
        assert_eq!(d.focus_minutes(), 30);
        assert!(apply(&mut d, Target::Break, Adjustment::Down));
        assert_eq!(d.break_minutes(), 4);
    }

    #[test]
    fn test_apply_at_bound_is_unchanged() {
        let mut d = Durations::new(60, 1);
        assert!(!apply(&mut d, Target::Focus, Adjustment::Up));
        assert!(!apply(&mut d, Target::Break, Adjustment::Down));
        assert_eq!(d, Durations::new(60, 1));
    }

    #[test]
    fn test_apply_set_clamps() {
        let mut d = Durations::default();
        apply(&mut d, Target::Focus, Adjustment::Set(63));
        assert_eq!(d.focus_minutes(), 60);
        apply(&mut d, Target::Focus, Adjustment::Set(2));
        assert_eq!(d.focus_minutes(), 5);
    }

    #[test]
    fn test_adjust_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("pomo"));

        adjust(&paths, &Config::default(), Target::Break, "10", OutputFormat::Json).unwrap();

        let loaded = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(loaded.timer.break_minutes, 10);
        assert_eq!(loaded.timer.focus_minutes, 25);
    }

    #[test]
    fn test_adjust_rejects_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        let err = adjust(&paths, &Config::default(), Target::Focus, "later", OutputFormat::Pretty)
            .unwrap_err();
        assert!(matches!(err, PomoError::InvalidArgument(_)));
        assert!(!paths.config_file.exists());
    }
}
