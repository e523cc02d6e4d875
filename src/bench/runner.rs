//! Suite runner
//!
//! Executes the four probes strictly in order. In text mode each probe's
//! lines are written and flushed before the next probe starts.

use crate::bench::probes;
use crate::config::persistence::ResultsStorage;
use crate::config::{OutputFormat, SuiteConfig};
use crate::models::{ProbeKind, ProbeResult, SuiteReport};
use crate::util::units::format_seconds;
use crate::{ProbeBenchError, Result, SUITE_FOOTER, SUITE_TITLE};
use std::hint::black_box;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Measure wall-clock time for a synchronous operation
pub fn measure<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    (result, elapsed)
}

/// Run one probe and return its measurement
///
/// Only the workload body is timed; reading the reported value off the
/// produced container happens after the clock stops.
pub fn run_probe(kind: ProbeKind) -> ProbeResult {
    let n = black_box(kind.input_size());
    debug!(probe = kind.name(), input = n, "probe started");

    let (value, elapsed) = match kind {
        ProbeKind::Recursion => measure(|| probes::fib(n)),
        ProbeKind::Iteration => measure(|| probes::accumulate(n)),
        ProbeKind::ListAllocation => {
            let (values, elapsed) = measure(|| probes::append_sequence(n));
            (values.len() as u64, elapsed)
        }
        ProbeKind::MapAccess => {
            let (map, elapsed) = measure(|| probes::overwrite_key(n));
            (map.get(probes::MAP_KEY).copied().unwrap_or_default(), elapsed)
        }
    };

    debug!(
        probe = kind.name(),
        value,
        elapsed_ns = elapsed.as_nanos() as u64,
        "probe finished"
    );
    ProbeResult::new(kind, black_box(value), elapsed)
}

/// Suite executor
#[derive(Debug)]
pub struct SuiteRunner {
    config: SuiteConfig,
    storage: Option<ResultsStorage>,
}

impl SuiteRunner {
    /// Create a runner; opens the standard results history when the
    /// configuration asks for recording
    pub fn new(config: SuiteConfig) -> Result<Self> {
        config.validate()?;

        let storage = if config.record_history {
            Some(ResultsStorage::with_path(
                ResultsStorage::results_file_path()?,
                config.history_limit,
            ))
        } else {
            None
        };

        Ok(Self { config, storage })
    }

    /// Keep the results history in `path` instead of the standard location
    ///
    /// The configured history limit applies; nothing is recorded unless
    /// `record_history` is set.
    pub fn with_history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage = Some(ResultsStorage::with_path(path, self.config.history_limit));
        self
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Run every probe and write the report to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> Result<SuiteReport> {
        let report = match self.config.output {
            OutputFormat::Text => self.run_text(out)?,
            OutputFormat::Json => self.run_json(out)?,
        };

        info!(
            probes = report.probes.len(),
            total_ns = report.total_elapsed().as_nanos() as u64,
            "suite complete"
        );

        if self.config.record_history {
            if let Some(storage) = &self.storage {
                storage.append_result(report.clone())?;
            }
        }

        Ok(report)
    }

    fn run_text<W: Write>(&self, out: &mut W) -> Result<SuiteReport> {
        let mut report = SuiteReport::new();
        writeln!(out, "{}", SUITE_TITLE)?;

        for kind in ProbeKind::ALL {
            writeln!(out, "{}", kind.label())?;
            out.flush()?;

            let result = run_probe(kind);
            write_probe(out, &result)?;
            out.flush()?;
            report.push(result);
        }

        writeln!(out, "{}", SUITE_FOOTER)?;
        out.flush()?;
        Ok(report)
    }

    fn run_json<W: Write>(&self, out: &mut W) -> Result<SuiteReport> {
        let mut report = SuiteReport::new();
        for kind in ProbeKind::ALL {
            report.push(run_probe(kind));
        }

        serde_json::to_writer_pretty(&mut *out, &report).map_err(|e| {
            if e.is_io() {
                ProbeBenchError::IoError(e.into())
            } else {
                ProbeBenchError::OutputError(format!("Failed to write JSON report: {}", e))
            }
        })?;
        writeln!(out)?;
        out.flush()?;
        Ok(report)
    }
}

/// Write the result and time lines of one probe
pub fn write_probe<W: Write>(out: &mut W, result: &ProbeResult) -> Result<()> {
    writeln!(out, "{}", result.result_line())?;
    writeln!(out, "   Time: {}", format_seconds(result.elapsed))?;
    Ok(())
}
