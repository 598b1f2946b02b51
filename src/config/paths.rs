//! Path resolution for pomo configuration.
//!
//! pomo keeps its files in `~/.pomo/` unless another root is given with
//! `--home` or `POMO_HOME`:
//! - `config.yaml` - durations, output and notification settings

use std::path::PathBuf;

use crate::error::PomoError;

/// Paths to pomo's configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomo/`
    pub root: PathBuf,
    /// Config file: `~/.pomo/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PomoError> {
        let home = std::env::var("HOME")
            .map_err(|_| PomoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomo")))
    }

    /// Resolve paths from an optional override root, falling back to `~/.pomo/`.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the home directory cannot be determined.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, PomoError> {
        root.map_or_else(Self::new, |root| Ok(Self::with_root(root)))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PomoError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PomoError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-pomo");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
    }

    #[test]
    fn test_resolve_prefers_override() {
        let root = PathBuf::from("/tmp/elsewhere");
        let paths = Paths::resolve(Some(root.clone())).unwrap();
        assert_eq!(paths.root, root);
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join("pomo"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
