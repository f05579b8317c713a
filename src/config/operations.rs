//! Config loading and validation.

use super::model::Config;
use crate::error::{Result, SweepError};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SweepError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SweepError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| {
            SweepError::UserError(format!("{} (in '{}')", e, path.display()))
        })
    }

    /// Load config if the file exists, otherwise use defaults.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            debug!(path = %path.display(), "loading config");
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file means all defaults
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SweepError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// - `remote` must be non-empty and contain no whitespace
    /// - `base_branch`, when set, must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.remote.trim().is_empty() {
            return Err(SweepError::UserError(
                "config validation failed: remote must not be empty".to_string(),
            ));
        }

        if self.remote.chars().any(char::is_whitespace) {
            return Err(SweepError::UserError(format!(
                "config validation failed: remote '{}' must not contain whitespace",
                self.remote
            )));
        }

        if let Some(base) = &self.base_branch
            && base.trim().is_empty()
        {
            return Err(SweepError::UserError(
                "config validation failed: base_branch must not be empty when set".to_string(),
            ));
        }

        Ok(())
    }
}
