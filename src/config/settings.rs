//! Configuration settings for pomo.
//!
//! Settings are loaded from `~/.pomo/config.yaml`.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::PomoError;
use crate::focus::settings::{DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES};
use crate::focus::Durations;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Session durations.
    pub timer: TimerConfig,
    /// Phase-complete notification settings.
    pub notifications: NotificationConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to the `colored` crate.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Session duration settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Focus phase length in minutes (5-60, step 5).
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Break phase length in minutes (1-15).
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
}

/// Notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationConfig {
    /// Ring the terminal bell when a phase completes.
    #[serde(default = "default_true")]
    pub bell: bool,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_focus_minutes() -> u32 {
    DEFAULT_FOCUS_MINUTES
}

const fn default_break_minutes() -> u32 {
    DEFAULT_BREAK_MINUTES
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            bell: default_true(),
        }
    }
}

impl TimerConfig {
    /// Stored durations, clamped into their allowed ranges.
    #[must_use]
    pub fn durations(&self) -> Durations {
        Durations::new(self.focus_minutes, self.break_minutes)
    }

    /// Store the given durations.
    pub fn set_durations(&mut self, durations: Durations) {
        self.focus_minutes = durations.focus_minutes();
        self.break_minutes = durations.break_minutes();
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    /// Stored durations outside their ranges are clamped.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomoError> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let mut config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        let durations = config.timer.durations();
        config.timer.set_durations(durations);
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PomoError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PomoError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })?;
        debug!("saved config to {}", path.display());
        Ok(())
    }
}
