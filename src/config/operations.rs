//! Config loading and validation.

use super::baseline::Baseline;
use super::model::PolicyConfig;
use crate::error::{PolicyError, Result};
use std::path::Path;

impl PolicyConfig {
    /// Load config from a JSON file.
    ///
    /// # Returns
    ///
    /// * `Ok(PolicyConfig)` - Successfully loaded and validated config
    /// * `Err(PolicyError::ConfigError)` - Read error, parse error or invalid baseline entry
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PolicyError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PolicyConfig = serde_json::from_str(json)
            .map_err(|e| PolicyError::ConfigError(format!("failed to parse config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Every baseline entry must be non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.baseline.iter().any(|entry| entry.trim().is_empty()) {
            return Err(PolicyError::ConfigError(
                "config validation failed: baseline entries must be non-empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load config, falling back to the default on any problem.
    ///
    /// A missing file is not a problem and yields no error. Any other
    /// failure is returned alongside the default config so the caller can
    /// print it as a warning.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> (Self, Option<PolicyError>) {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no policy config, using empty baseline");
            return (Self::default(), None);
        }

        match Self::load(path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    /// Compile the baseline for membership tests.
    pub fn compiled_baseline(&self) -> Baseline {
        Baseline::new(&self.baseline)
    }
}
