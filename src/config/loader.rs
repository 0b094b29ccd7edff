use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Config;

/// Seeding more items than this is almost certainly a typo in the config.
const MAX_INITIAL_COUNT: u64 = 10_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/uniflow/config.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("uniflow").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here: the
    /// caller asked for this file specifically.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The tick rate is non-zero
    /// - The devtools history limit is non-zero
    /// - The initial count is within the seedable range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.demo.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "demo.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if self.devtools.history_limit == 0 {
            return Err(ConfigError::ValidationError {
                message: "devtools.history_limit must be greater than zero".to_string(),
            });
        }

        if self.demo.initial_count > MAX_INITIAL_COUNT {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "demo.initial_count must be at most {} (got {})",
                    MAX_INITIAL_COUNT, self.demo.initial_count
                ),
            });
        }

        Ok(())
    }
}
