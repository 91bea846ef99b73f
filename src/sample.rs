//! Sample type produced by the probe loop.

use std::time::Duration;

use chrono::{DateTime, Local};

use crate::output::{format_latency, format_timestamp};

/// Status code recorded when a probe got no response at all
/// (connection refused, DNS failure, TLS error, etc.).
pub const STATUS_UNAVAILABLE: u16 = 0;

/// Outcome of one probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Wall-clock time the request was started.
    pub timestamp: DateTime<Local>,
    /// HTTP status code, or [`STATUS_UNAVAILABLE`] if the request failed.
    pub status_code: u16,
    /// Time from request start until the response (or error) arrived.
    pub latency: Duration,
}

impl Sample {
    /// Create a new sample.
    pub fn new(timestamp: DateTime<Local>, status_code: u16, latency: Duration) -> Self {
        Self {
            timestamp,
            status_code,
            latency,
        }
    }

    /// Whether the probe failed before a status code was received.
    pub fn is_failure(&self) -> bool {
        self.status_code == STATUS_UNAVAILABLE
    }

    /// Render as the three CSV fields `timestamp,status_code,latency`.
    pub fn to_record(&self) -> [String; 3] {
        [
            format_timestamp(&self.timestamp),
            self.status_code.to_string(),
            format_latency(self.latency),
        ]
    }
}
