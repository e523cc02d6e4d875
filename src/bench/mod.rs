//! Benchmark engine module
//!
//! Contains the probe workloads and the runner that times and reports them.

pub mod probes;
pub mod runner;

// Re-export commonly used types
pub use runner::{measure, run_probe, SuiteRunner};
