//! Results persistence module
//!
//! Handles saving, loading, and rotation of suite reports.

use crate::models::SuiteReport;
use crate::{ProbeBenchError, Result, APP_NAME, MAX_RESULTS_HISTORY, RESULTS_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const RESULTS_FILE_VERSION: u32 = 1;

/// Results storage manager
#[derive(Debug)]
pub struct ResultsStorage {
    results_path: PathBuf,
    limit: usize,
}

/// Results file structure for JSON persistence
#[derive(Debug, Serialize, Deserialize)]
struct ResultsFile {
    version: u32,
    results: Vec<SuiteReport>,
}

impl ResultsStorage {
    /// Create a results storage at the standard location
    pub fn new() -> Result<Self> {
        let results_path = Self::results_file_path()?;
        Ok(Self::with_path(results_path, MAX_RESULTS_HISTORY))
    }

    /// Create a results storage backed by an explicit file
    pub fn with_path(results_path: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            results_path: results_path.into(),
            limit: limit.max(1),
        }
    }

    /// Get the standard results file path
    /// Uses $DATA_HOME/probebench/results.json
    pub fn results_file_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            ProbeBenchError::PersistenceError("Unable to determine data directory".to_string())
        })?;

        Ok(data_dir.join(APP_NAME).join(RESULTS_FILE))
    }

    /// Load all results from the results file
    pub fn load_results(&self) -> Result<Vec<SuiteReport>> {
        if !self.results_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.results_path).map_err(|e| {
            ProbeBenchError::PersistenceError(format!(
                "Failed to read results file {}: {}",
                self.results_path.display(),
                e
            ))
        })?;

        let results_file: ResultsFile = serde_json::from_str(&content).map_err(|e| {
            ProbeBenchError::PersistenceError(format!(
                "Failed to parse results file {}: {}",
                self.results_path.display(),
                e
            ))
        })?;

        if results_file.version != RESULTS_FILE_VERSION {
            return Err(ProbeBenchError::PersistenceError(format!(
                "Unsupported results file version {} in {}",
                results_file.version,
                self.results_path.display()
            )));
        }

        Ok(results_file.results)
    }

    /// Append a new report to the results file
    /// Keeps only the most recent `limit` reports
    pub fn append_result(&self, report: SuiteReport) -> Result<()> {
        let mut results = self.load_results()?;
        results.push(report);

        if results.len() > self.limit {
            let skip_count = results.len() - self.limit;
            warn!(
                dropped = skip_count,
                limit = self.limit,
                "rotating results history"
            );
            results.drain(..skip_count);
        }

        self.save_results(results)
    }

    fn save_results(&self, results: Vec<SuiteReport>) -> Result<()> {
        if let Some(parent) = self.results_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ProbeBenchError::PersistenceError(format!(
                    "Failed to create results directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let results_file = ResultsFile {
            version: RESULTS_FILE_VERSION,
            results,
        };
        let content = serde_json::to_string_pretty(&results_file)?;

        fs::write(&self.results_path, content).map_err(|e| {
            ProbeBenchError::PersistenceError(format!(
                "Failed to write results file {}: {}",
                self.results_path.display(),
                e
            ))
        })?;

        debug!(
            path = %self.results_path.display(),
            count = results_file.results.len(),
            "results history saved"
        );
        Ok(())
    }

    /// Get the number of stored results
    pub fn count_results(&self) -> Result<usize> {
        Ok(self.load_results()?.len())
    }

    /// Clear all stored results
    pub fn clear_results(&self) -> Result<()> {
        if self.results_path.exists() {
            fs::remove_file(&self.results_path).map_err(|e| {
                ProbeBenchError::PersistenceError(format!(
                    "Failed to remove results file {}: {}",
                    self.results_path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    pub fn results_path(&self) -> &Path {
        &self.results_path
    }
}
