//! probebench - Micro Benchmark Suite
//!
//! Times four fixed workloads (naive recursion, counted accumulation,
//! vector growth and single-key map overwrites) and reports each result
//! with its wall-clock duration.

use std::fmt;

// Public re-exports
pub mod bench;
pub mod config;
pub mod models;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum ProbeBenchError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Results history persistence error
    PersistenceError(String),
    /// Report rendering or serialization error
    OutputError(String),
}

impl fmt::Display for ProbeBenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeBenchError::IoError(err) => write!(f, "I/O error: {}", err),
            ProbeBenchError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ProbeBenchError::PersistenceError(msg) => {
                write!(f, "Results persistence error: {}", msg)
            }
            ProbeBenchError::OutputError(msg) => write!(f, "Output error: {}", msg),
        }
    }
}

impl std::error::Error for ProbeBenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeBenchError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProbeBenchError {
    fn from(err: std::io::Error) -> Self {
        ProbeBenchError::IoError(err)
    }
}

impl From<serde_json::Error> for ProbeBenchError {
    fn from(err: serde_json::Error) -> Self {
        ProbeBenchError::PersistenceError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for ProbeBenchError {
    fn from(err: toml::de::Error) -> Self {
        ProbeBenchError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for ProbeBenchError {
    fn from(err: toml::ser::Error) -> Self {
        ProbeBenchError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for probebench operations
pub type Result<T> = std::result::Result<T, ProbeBenchError>;

/// Error handling utilities
pub mod error {
    use super::ProbeBenchError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &ProbeBenchError) -> String {
        match error {
            ProbeBenchError::IoError(err) if err.kind() == std::io::ErrorKind::BrokenPipe => {
                "Output stream closed before the report was written.".to_string()
            }
            ProbeBenchError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            ProbeBenchError::PersistenceError(_) => {
                "Failed to save results. Check disk space and permissions.".to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "probebench";
pub const CONFIG_FILE: &str = "probebench.toml";
pub const RESULTS_FILE: &str = "results.json";
pub const MAX_RESULTS_HISTORY: usize = 100;
pub const SUITE_TITLE: &str = "--- Python Benchmark Suite ---";
pub const SUITE_FOOTER: &str = "--- END ---";
