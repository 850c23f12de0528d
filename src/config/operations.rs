//! Config loading, discovery, and validation.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::error::{GachaError, Result};
use log::{debug, info};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(GachaError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GachaError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for this run.
    ///
    /// An explicit path must exist and parse. Otherwise `gacha.yaml` in `dir`
    /// is used when present, and defaults apply when it is not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            info!("loading config from {}", path.display());
            return Self::load(path);
        }

        let implicit = dir.join(DEFAULT_CONFIG_FILE);
        if implicit.is_file() {
            info!("loading config from {}", implicit.display());
            Self::load(&implicit)
        } else {
            debug!("no {} in {}, using defaults", DEFAULT_CONFIG_FILE, dir.display());
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // A blank file means all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| GachaError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            GachaError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `batch` must be positive
    /// - `max_input_bytes` must be positive
    pub fn validate(&self) -> Result<()> {
        if self.batch == 0 {
            return Err(GachaError::ConfigError(
                "config validation failed: batch must be greater than 0".to_string(),
            ));
        }

        if self.max_input_bytes == 0 {
            return Err(GachaError::ConfigError(
                "config validation failed: max_input_bytes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
