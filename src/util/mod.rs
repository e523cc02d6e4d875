//! Utility functions module
//!
//! Contains helpers for duration formatting.

pub mod units;

// Re-export commonly used functions
pub use units::{format_elapsed, format_seconds};
