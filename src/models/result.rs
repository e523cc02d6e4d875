//! Benchmark result data models
//!
//! Contains structures for storing and serializing probe measurements
//! and whole-suite reports.

use crate::util::units::format_elapsed;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The four fixed probes, in run order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProbeKind {
    /// Naive double-recursive Fibonacci
    Recursion,
    /// Counted accumulation loop
    Iteration,
    /// Growable vector append
    ListAllocation,
    /// Repeated overwrite of one map key
    MapAccess,
}

impl ProbeKind {
    /// All probes in the order the suite runs them
    pub const ALL: [ProbeKind; 4] = [
        ProbeKind::Recursion,
        ProbeKind::Iteration,
        ProbeKind::ListAllocation,
        ProbeKind::MapAccess,
    ];

    /// Fixed input size of the probe
    pub fn input_size(&self) -> u64 {
        match self {
            ProbeKind::Recursion => 28,
            ProbeKind::Iteration => 1_000_000,
            ProbeKind::ListAllocation | ProbeKind::MapAccess => 100_000,
        }
    }

    /// Numbered heading printed before the probe runs
    pub fn label(&self) -> &'static str {
        match self {
            ProbeKind::Recursion => "1. Recursion (Fib 28)...",
            ProbeKind::Iteration => "2. Iteration (Sum 1M)...",
            ProbeKind::ListAllocation => "3. List Allocation (Push 100k)...",
            ProbeKind::MapAccess => "4. Map Access (100k Overwrites)...",
        }
    }

    /// Prefix of the result line; recursion prints the bare value
    pub fn result_prefix(&self) -> Option<&'static str> {
        match self {
            ProbeKind::Recursion => None,
            ProbeKind::Iteration => Some("Result"),
            ProbeKind::ListAllocation => Some("Len"),
            ProbeKind::MapAccess => Some("Last Val"),
        }
    }

    /// Short name used in logs and summaries
    pub fn name(&self) -> &'static str {
        match self {
            ProbeKind::Recursion => "recursion",
            ProbeKind::Iteration => "iteration",
            ProbeKind::ListAllocation => "list_allocation",
            ProbeKind::MapAccess => "map_access",
        }
    }
}

/// Measurement of a single probe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Which probe produced this measurement
    pub kind: ProbeKind,
    /// Value computed by the probe body
    pub value: u64,
    /// Wall-clock time spent in the probe body
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,
}

impl ProbeResult {
    pub fn new(kind: ProbeKind, value: u64, elapsed: Duration) -> Self {
        Self {
            kind,
            value,
            elapsed,
        }
    }

    /// Elapsed time in fractional seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Result line as printed in the text report
    pub fn result_line(&self) -> String {
        match self.kind.result_prefix() {
            Some(prefix) => format!("   {}: {}", prefix, self.value),
            None => self.value.to_string(),
        }
    }
}

/// Complete record of one suite run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Timestamp when the suite was started
    pub timestamp: DateTime<Utc>,
    /// Host information at time of run
    pub system_info: SystemInfo,
    /// Probe measurements in run order
    pub probes: Vec<ProbeResult>,
}

/// Host information captured at run time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system name
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// Logical CPUs available to the process
    pub cpu_count: usize,
}

impl SuiteReport {
    /// Create an empty report stamped with the current time
    pub fn new() -> Self {
        Self::with_system_info(SystemInfo::detect())
    }

    /// Create an empty report with custom system info
    pub fn with_system_info(system_info: SystemInfo) -> Self {
        Self {
            timestamp: Utc::now(),
            system_info,
            probes: Vec::with_capacity(ProbeKind::ALL.len()),
        }
    }

    pub fn push(&mut self, result: ProbeResult) {
        self.probes.push(result);
    }

    /// Look up the measurement of a probe
    pub fn get(&self, kind: ProbeKind) -> Option<&ProbeResult> {
        self.probes.iter().find(|p| p.kind == kind)
    }

    /// Sum of all probe durations
    pub fn total_elapsed(&self) -> Duration {
        self.probes.iter().map(|p| p.elapsed).sum()
    }

    /// Get a human-readable one-line summary of the run
    pub fn summary(&self) -> String {
        let probes = self
            .probes
            .iter()
            .map(|p| format!("{}={} ({})", p.kind.name(), p.value, format_elapsed(p.elapsed)))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{} - {} - total {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            probes,
            format_elapsed(self.total_elapsed())
        )
    }
}

impl Default for SuiteReport {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemInfo {
    /// Create system info by detecting current system
    pub fn detect() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpu_count: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

// Durations are stored as integer nanoseconds
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_nanos() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let nanos = u64::deserialize(deserializer)?;
        Ok(Duration::from_nanos(nanos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_system_info() -> SystemInfo {
        SystemInfo {
            os: "linux".to_string(),
            arch: "x86_64".to_string(),
            cpu_count: 8,
        }
    }

    fn create_test_report() -> SuiteReport {
        let mut report = SuiteReport::with_system_info(create_test_system_info());
        report.push(ProbeResult::new(
            ProbeKind::Recursion,
            317_811,
            Duration::from_millis(40),
        ));
        report.push(ProbeResult::new(
            ProbeKind::Iteration,
            499_999_500_000,
            Duration::from_millis(2),
        ));
        report
    }

    #[test]
    fn test_probe_order_and_sizes() {
        let sizes: Vec<u64> = ProbeKind::ALL.iter().map(|k| k.input_size()).collect();
        assert_eq!(sizes, vec![28, 1_000_000, 100_000, 100_000]);
        assert!(ProbeKind::ALL[0].label().starts_with("1. "));
        assert!(ProbeKind::ALL[3].label().starts_with("4. "));
    }

    #[test]
    fn test_result_lines() {
        let fib = ProbeResult::new(ProbeKind::Recursion, 317_811, Duration::ZERO);
        assert_eq!(fib.result_line(), "317811");

        let len = ProbeResult::new(ProbeKind::ListAllocation, 100_000, Duration::ZERO);
        assert_eq!(len.result_line(), "   Len: 100000");

        let last = ProbeResult::new(ProbeKind::MapAccess, 99_999, Duration::ZERO);
        assert_eq!(last.result_line(), "   Last Val: 99999");
    }

    #[test]
    fn test_report_lookup_and_total() {
        let report = create_test_report();

        assert_eq!(report.get(ProbeKind::Recursion).map(|p| p.value), Some(317_811));
        assert!(report.get(ProbeKind::MapAccess).is_none());
        assert_eq!(report.total_elapsed(), Duration::from_millis(42));
    }

    #[test]
    fn test_report_summary() {
        let summary = create_test_report().summary();
        assert!(summary.contains("recursion=317811 (40ms)"));
        assert!(summary.contains("iteration=499999500000 (2ms)"));
        assert!(summary.contains("total 42ms"));
        assert!(summary.contains("UTC"));
    }

    #[test]
    fn test_system_info_detection() {
        let info = SystemInfo::detect();
        assert!(!info.os.is_empty());
        assert!(!info.arch.is_empty());
        assert!(info.cpu_count >= 1);
    }

    #[test]
    fn test_serde_serialization() {
        let report = create_test_report();

        let json = serde_json::to_string(&report).expect("Failed to serialize to JSON");
        assert!(json.contains("\"Recursion\""));
        assert!(json.contains("40000000"));

        let deserialized: SuiteReport =
            serde_json::from_str(&json).expect("Failed to deserialize from JSON");
        assert_eq!(deserialized.probes, report.probes);
        assert_eq!(deserialized.system_info, report.system_info);
        assert_eq!(deserialized.timestamp, report.timestamp);
    }
}
