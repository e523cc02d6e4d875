//! Data models module
//!
//! Contains the probe identifiers, per-probe measurements and the
//! serializable report of a whole suite run.

pub mod result;

// Re-export commonly used types
pub use result::{ProbeKind, ProbeResult, SuiteReport, SystemInfo};
