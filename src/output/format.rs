//! Field formatting for output rows.
//!
//! Durations use the compact unit notation common to Go tooling (`1.204s`,
//! `1m2.5s`, `350ms`) rather than humantime's spaced form, so rows stay a
//! single token wide.

use std::fmt::Write;
use std::time::Duration;

use chrono::{DateTime, TimeZone};

/// Timestamp layout: abbreviated month, space-padded day, time with milliseconds.
pub const TIMESTAMP_FORMAT: &str = "%b %e %H:%M:%S%.3f";

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Format a timestamp as `Jan  2 15:04:05.000`.
pub fn format_timestamp<Tz>(ts: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Format a latency truncated to whole milliseconds.
pub fn format_latency(latency: Duration) -> String {
    let millis = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
    format_duration(Duration::from_millis(millis))
}

/// Format a duration in compact unit notation.
///
/// Sub-second values use the largest fitting unit (`ns`, `µs`, `ms`) with a
/// trimmed fraction. Longer values are split into hours, minutes and
/// fractional seconds, omitting leading zero components (`2s`, `1m0s`,
/// `1h0m0.5s`). Zero is `0s`.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();

    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < NANOS_PER_MICRO {
        return format!("{nanos}ns");
    }
    if nanos < NANOS_PER_MILLI {
        return with_fraction(nanos, NANOS_PER_MICRO, 3, "µs");
    }
    if nanos < NANOS_PER_SEC {
        return with_fraction(nanos, NANOS_PER_MILLI, 6, "ms");
    }

    let total_secs = d.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let secs = u128::from(total_secs % 60) * NANOS_PER_SEC + u128::from(d.subsec_nanos());

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    out.push_str(&with_fraction(secs, NANOS_PER_SEC, 9, "s"));
    out
}

/// `value / unit` with the remainder as a decimal fraction, trailing zeros trimmed.
fn with_fraction(value: u128, unit: u128, digits: usize, suffix: &str) -> String {
    let whole = value / unit;
    let frac = value % unit;
    if frac == 0 {
        return format!("{whole}{suffix}");
    }
    let frac = format!("{frac:0digits$}");
    format!("{whole}.{}{suffix}", frac.trim_end_matches('0'))
}
