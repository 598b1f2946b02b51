//! Error types for pomo.
//!
//! The timer core never fails; these errors come from the layers around it
//! (configuration files, the terminal, output serialization).

use thiserror::Error;

/// Errors surfaced by the pomo binary and library.
#[derive(Debug, Error)]
pub enum PomoError {
    /// Configuration could not be located, read, parsed or written.
    #[error("config error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("failed to serialize output: {0}")]
    Parse(#[from] serde_json::Error),

    /// YAML (de)serialization failure.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Terminal setup, drawing or event polling failed.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// A command-line value could not be interpreted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PomoError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PomoError::Config("missing home".to_string());
        assert_eq!(err.to_string(), "config error: missing home");

        let err = PomoError::InvalidArgument("focus: abc".to_string());
        assert_eq!(err.to_string(), "invalid argument: focus: abc");
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PomoError = io.into();
        assert!(matches!(err, PomoError::Io(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_invalid_argument() {
        assert_eq!(PomoError::InvalidArgument(String::new()).exit_code(), 2);
    }
}
