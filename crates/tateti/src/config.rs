//! Application configuration.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Config file read when no `--config` is given. Optional.
pub const DEFAULT_CONFIG_PATH: &str = "tateti.toml";

/// Environment variable overriding the store location.
pub const STORE_ENV: &str = "TATETI_STORE";

/// Runtime configuration, loaded from TOML.
///
/// ```toml
/// store_path = "tateti_store.json"
/// log_file = "tateti.log"
/// log_filter = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct Config {
    /// JSON file holding scores and preferences.
    store_path: PathBuf,

    /// Log file used while the terminal UI owns the screen.
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("tateti_store.json"),
            log_file: PathBuf::from("tateti.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;

        info!(store = %config.store_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration for this run.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`]
    /// is used when present and built-in defaults otherwise. The
    /// [`STORE_ENV`] variable then overrides the store location.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a config file exists but is invalid, or
    /// an explicit path cannot be read.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };

        Ok(match std::env::var_os(STORE_ENV) {
            Some(store) => {
                debug!(store = ?store, "Store path overridden from environment");
                config.with_store_path(store)
            }
            None => config,
        })
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Failed to read config file: {}", err))
    }
}

impl From<toml::de::Error> for ConfigError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Failed to parse config: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(r#"store_path = "scores.json""#).unwrap();
        assert_eq!(config.store_path(), &PathBuf::from("scores.json"));
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_setters_override() {
        let config = Config::default()
            .with_log_filter("debug")
            .with_store_path("elsewhere.json");
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.store_path(), &PathBuf::from("elsewhere.json"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = Config::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "store_path = [unterminated").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }
}
