//! Configuration management module
//!
//! Handles loading, saving, and validation of suite output preferences.
//! Probe input sizes are fixed and deliberately absent from here.

use crate::{ProbeBenchError, Result, APP_NAME, CONFIG_FILE, MAX_RESULTS_HISTORY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod persistence;

/// Suite configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// How the report is written to the output sink
    pub output: OutputFormat,
    /// Whether each run is appended to the results history
    pub record_history: bool,
    /// Maximum number of runs kept in the results history
    pub history_limit: usize,
}

/// Report output variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Line-oriented report, streamed probe by probe
    Text,
    /// Single pretty-printed JSON document after the last probe
    Json,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            record_history: false,
            history_limit: MAX_RESULTS_HISTORY,
        }
    }
}

impl SuiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        const MAX_HISTORY_LIMIT: usize = 10_000;

        if self.history_limit == 0 {
            return Err(ProbeBenchError::ConfigError(
                "History limit must be greater than 0".to_string(),
            ));
        }

        if self.history_limit > MAX_HISTORY_LIMIT {
            return Err(ProbeBenchError::ConfigError(format!(
                "History limit too large: {} (max: {})",
                self.history_limit, MAX_HISTORY_LIMIT
            )));
        }

        Ok(())
    }

    /// Set the report output format
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Set whether runs are recorded in the results history
    pub fn with_record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Set the results history limit
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Load configuration from a TOML file
    /// Returns default configuration if file doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ProbeBenchError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ProbeBenchError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ProbeBenchError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(path, content).map_err(|e| {
            ProbeBenchError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/probebench/probebench.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ProbeBenchError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
