//! Units formatting utilities
//!
//! Provides functions for rendering probe durations, both as the raw
//! fractional seconds of the text report and as human-readable strings.

use std::time::Duration;

/// Format duration as fractional seconds for the text report
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use probebench::util::units::format_seconds;
///
/// assert_eq!(format_seconds(Duration::from_millis(1500)), "1.5");
/// assert_eq!(format_seconds(Duration::from_micros(250)), "0.00025");
/// ```
pub fn format_seconds(duration: Duration) -> String {
    format!("{}", duration.as_secs_f64())
}

/// Format duration into human-readable string
///
/// Sub-microsecond precision is dropped so summaries stay short.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use probebench::util::units::format_elapsed;
///
/// assert_eq!(format_elapsed(Duration::from_secs(90)), "1m 30s");
/// assert_eq!(format_elapsed(Duration::from_nanos(1_234_567)), "1ms 234us");
/// ```
pub fn format_elapsed(duration: Duration) -> String {
    let truncated = Duration::from_micros(duration.as_micros() as u64);
    humantime::format_duration(truncated).to_string()
}
