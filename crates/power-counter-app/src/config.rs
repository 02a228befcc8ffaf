//! Configuration loading and typed config structures for the app.
//!
//! Configuration lives in `power-counter.yaml` in the working directory (or
//! the path given as the first argument). Every field has a default, so a
//! missing file or a partial one is fine.
//!
//! ```yaml
//! storage:
//!   backend: file        # file | memory
//!   directory: ./data
//! logging:
//!   level: info
//!   json: false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "power-counter.yaml";

/// Environment variable overriding `storage.directory`.
pub const DATA_DIR_ENV: &str = "POWER_COUNTER_DATA_DIR";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level app configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Where the player list is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply the value of [`DATA_DIR_ENV`], if set and non-empty.
    pub fn apply_overrides(&mut self, data_dir: Option<String>) {
        if let Some(dir) = data_dir.filter(|d| !d.trim().is_empty()) {
            self.storage.directory = PathBuf::from(dir);
        }
    }
}

/// Which [`BlobStore`](power_counter_store::BlobStore) backs the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per key under `storage.directory`.
    #[default]
    File,
    /// Kept in memory; lost on exit.
    Memory,
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Backend selection.
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the `file` backend.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            directory: default_directory(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. `info`,
    /// `power_counter_core=debug`).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("data")
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.directory, PathBuf::from("data"));
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
storage:
  backend: memory
  directory: /var/lib/power-counter
logging:
  level: debug
  json: true
";
        let config = AppConfig::parse(yaml).unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(
            config.storage.directory,
            PathBuf::from("/var/lib/power-counter")
        );
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn parse_partial_yaml_fills_defaults() {
        let config = AppConfig::parse("logging:\n  level: warn\n").unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn parse_empty_is_default() {
        assert_eq!(AppConfig::parse("").unwrap(), AppConfig::default());
    }

    #[test]
    fn unknown_backend_is_an_error() {
        let result = AppConfig::parse("storage:\n  backend: cloud\n");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn data_dir_override() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some(String::from("/tmp/pc")));
        assert_eq!(config.storage.directory, PathBuf::from("/tmp/pc"));
    }

    #[test]
    fn blank_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some(String::from("  ")));
        config.apply_overrides(None);
        assert_eq!(config.storage.directory, PathBuf::from("data"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = AppConfig::from_file(Path::new("/nonexistent/power-counter.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
