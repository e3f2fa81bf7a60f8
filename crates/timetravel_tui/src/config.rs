//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File that receives log output (the terminal is busy drawing).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Whether the move list starts oldest first.
    #[serde(default = "default_ascending")]
    ascending: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("timetravel.log")
}

fn default_log_filter() -> String {
    "info,timetravel_tictactoe=debug".to_string()
}

fn default_ascending() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            ascending: default_ascending(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, log_file: Option<PathBuf>, descending: bool) -> Self {
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        if descending {
            self.ascending = false;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = TuiConfig::load_or_default(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, TuiConfig::default());
        assert!(*config.ascending());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("timetravel.toml");
        fs::write(&path, "ascending = false\n").expect("Failed to write TOML");

        let config = TuiConfig::load_or_default(&path).expect("valid config");
        assert!(!*config.ascending());
        assert_eq!(config.log_file(), &default_log_file());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("timetravel.toml");
        fs::write(&path, "ascending = \"sideways\"\n").expect("Failed to write TOML");

        let err = TuiConfig::from_file(&path).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().contains("config.rs"));
    }

    #[test]
    fn test_overrides_win() {
        let config = TuiConfig::default().with_overrides(Some(PathBuf::from("x.log")), true);
        assert_eq!(config.log_file(), &PathBuf::from("x.log"));
        assert!(!*config.ascending());
    }
}
