use std::path::Path;

use tracing::{debug, info};

use crate::errors::ConfigError;
use crate::paths::config_file_path;
use crate::types::WinMemConfig;

impl WinMemConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(
                event = "config.load_skipped",
                path = %path.display(),
                reason = "file not found"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;

        info!(
            event = "config.load_completed",
            path = %path.display(),
            adapter = %config.adapter.variant
        );
        Ok(config)
    }

    /// Load from `<config_dir>/SimpleAI/winmem.toml`, or defaults when there is
    /// no config directory at all.
    pub fn load_default() -> Result<Self, ConfigError> {
        match config_file_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: WinMemConfig =
            toml::from_str(content).map_err(|e| ConfigError::ConfigParseError {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: &str| {
            Err(ConfigError::InvalidConfiguration {
                message: message.to_string(),
            })
        };

        if self.lock.lock_attempts == 0 {
            return invalid("lock.lock_attempts must be at least 1");
        }
        if self.lock.open_attempts == 0 {
            return invalid("lock.open_attempts must be at least 1");
        }
        if self.drift.poll_interval_ms == 0 {
            return invalid("drift.poll_interval_ms must be greater than 0");
        }
        if self.probe.min_dimension == 0 {
            return invalid("probe.min_dimension must be greater than 0");
        }
        if self.bounds.min_visible_offset < 0 {
            return invalid("bounds.min_visible_offset must not be negative");
        }
        if self.probe.timeout_ms == 0 {
            return invalid("probe.timeout_ms must be greater than 0");
        }
        if self.probe.command.trim().is_empty() {
            return invalid("probe.command must not be empty");
        }
        Ok(())
    }
}
