use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A focus/break countdown timer for the terminal")]
#[command(long_about = "pomo - a focus/break countdown timer

Alternates between a focus phase and a break phase, ringing the terminal
bell at every boundary. Durations are stored in ~/.pomo/config.yaml.

QUICK START:
  pomo                      Open the interactive timer
  pomo run                  Countdown in the current terminal
  pomo run --focus 50 --break 10
  pomo config focus up      Lengthen the focus phase by 5 minutes

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the configured output format.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Directory holding config.yaml (default: ~/.pomo)
    #[arg(long, global = true, env = "POMO_HOME")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer (default)
    ///
    /// Keys:
    ///   space / enter / s   start a session
    ///   x                   stop the session
    ///   + / -               focus duration +/- 5 minutes (while stopped)
    ///   ] / [               break duration +/- 1 minute (while stopped)
    ///   q / esc             quit
    Tui,

    /// Run a session in the current terminal
    ///
    /// Prints the remaining time once per second and rings the bell at
    /// each phase boundary. Without --phases the session runs until
    /// interrupted.
    ///
    /// # Examples
    ///
    ///   pomo run
    ///   pomo run --focus 50 --break 10
    ///   pomo run --phases 2       One focus and one break, then stop
    Run(SessionArgs),

    /// Advance a session by a number of ticks without waiting
    ///
    /// Useful for checking what the timer will show after a given time.
    ///
    /// # Examples
    ///
    ///   pomo simulate --ticks 1501
    ///   pomo simulate --ticks 90 --focus 5 -o json
    Simulate {
        /// Number of one-second ticks to apply
        #[arg(long, short = 't')]
        ticks: u64,

        #[command(flatten)]
        durations: DurationArgs,
    },

    /// View or change stored durations
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate a shell completion script
    ///
    /// Example: pomo completions zsh > ~/.zsh/completions/_pomo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `pomo run`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SessionArgs {
    #[command(flatten)]
    pub durations: DurationArgs,

    /// Stop after this many completed phases (at least 1)
    #[arg(long, short = 'p', value_parser = clap::value_parser!(u32).range(1..))]
    pub phases: Option<u32>,

    /// Do not ring the bell at phase boundaries
    #[arg(long)]
    pub quiet: bool,
}

/// Per-invocation duration overrides.
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct DurationArgs {
    /// Focus duration in minutes (5-60), overrides the config
    #[arg(long, short = 'f')]
    pub focus: Option<u32>,

    /// Break duration in minutes (1-15), overrides the config
    #[arg(long = "break", short = 'b')]
    pub break_minutes: Option<u32>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,

    /// Print the config file path
    Path,

    /// Change the focus duration
    ///
    /// Accepts 'up', 'down' (steps of 5) or a number of minutes (5-60).
    Focus {
        /// up, down, or minutes
        value: String,
    },

    /// Change the break duration
    ///
    /// Accepts 'up', 'down' (steps of 1) or a number of minutes (1-15).
    Break {
        /// up, down, or minutes
        value: String,
    },
}

/// A requested duration change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Up,
    Down,
    Set(u32),
}

impl Adjustment {
    /// Parse `up`, `down`, `+`, `-` or a number of minutes.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "+" | "inc" => Some(Self::Up),
            "down" | "-" | "dec" => Some(Self::Down),
            other => other
                .trim_end_matches('m')
                .parse::<u32>()
                .ok()
                .map(Self::Set),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_command_defaults_to_tui() {
        let cli = Cli::try_parse_from(["pomo"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_output_format_json() {
        let cli = Cli::try_parse_from(["pomo", "--output", "json", "tui"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_output_format_short_after_subcommand() {
        let cli = Cli::try_parse_from(["pomo", "simulate", "-t", "3", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_run_args() {
        let cli = Cli::try_parse_from([
            "pomo", "run", "--focus", "50", "--break", "10", "--phases", "2",
        ])
        .unwrap();
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.durations.focus, Some(50));
        assert_eq!(args.durations.break_minutes, Some(10));
        assert_eq!(args.phases, Some(2));
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_run_rejects_zero_phases() {
        assert!(Cli::try_parse_from(["pomo", "run", "--phases", "0"]).is_err());
        assert!(Cli::try_parse_from(["pomo", "run", "-p", "1"]).is_ok());
    }

    #[test]
    fn test_cli_simulate_args() {
        let cli = Cli::try_parse_from(["pomo", "simulate", "--ticks", "1501", "-f", "5"]).unwrap();
        let Some(Commands::Simulate { ticks, durations }) = cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(ticks, 1501);
        assert_eq!(durations.focus, Some(5));
        assert_eq!(durations.break_minutes, None);
    }

    #[test]
    fn test_cli_simulate_requires_ticks() {
        assert!(Cli::try_parse_from(["pomo", "simulate"]).is_err());
    }

    #[test]
    fn test_cli_config_focus() {
        let cli = Cli::try_parse_from(["pomo", "config", "focus", "up"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::Focus { .. }
            })
        ));
    }

    #[test]
    fn test_cli_home_flag() {
        let cli = Cli::try_parse_from(["pomo", "--home", "/tmp/p", "config", "path"]).unwrap();
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/p")));
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["pomo", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Bash })
        ));
    }

    #[test]
    fn test_adjustment_parse() {
        assert_eq!(Adjustment::parse("up"), Some(Adjustment::Up));
        assert_eq!(Adjustment::parse("+"), Some(Adjustment::Up));
        assert_eq!(Adjustment::parse("DOWN"), Some(Adjustment::Down));
        assert_eq!(Adjustment::parse("30"), Some(Adjustment::Set(30)));
        assert_eq!(Adjustment::parse("30m"), Some(Adjustment::Set(30)));
        assert_eq!(Adjustment::parse("soon"), None);
        assert_eq!(Adjustment::parse("-3"), None);
    }
}
