use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::ui::theme::parse_hex;

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
    /// Uses `~/.config/toastline/config.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("toastline").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

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
    /// - The visible window is at least as long as the enter delay
    /// - Every theme color parses as `#rrggbb`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timings.visible_ms < self.timings.enter_delay_ms {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "visible_ms ({}) must be at least enter_delay_ms ({})",
                    self.timings.visible_ms, self.timings.enter_delay_ms
                ),
            });
        }

        for (name, value) in [
            ("success", &self.theme.success),
            ("error", &self.theme.error),
            ("info", &self.theme.info),
            ("warning", &self.theme.warning),
        ] {
            if parse_hex(value).is_none() {
                return Err(ConfigError::ValidationError {
                    message: format!("theme color '{name}' is not a #rrggbb value: '{value}'"),
                });
            }
        }

        Ok(())
    }
}
