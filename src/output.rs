//! Output Layer
//!
//! Renders [`Sample`](crate::Sample)s as a comma-separated stream:
//!
//! ```text
//! timestamp,status_code,latency
//! Mar  7 09:15:42.038,200,123ms
//! Mar  7 09:15:43.038,500,1.204s
//! ```
//!
//! - [`SampleWriter`]: Header, one flushed row per sample, trailing blank line
//! - [`format_duration`] / [`format_latency`] / [`format_timestamp`]: Field rendering

mod format;
mod writer;

pub use format::{TIMESTAMP_FORMAT, format_duration, format_latency, format_timestamp};
pub use writer::{HEADER, OutputError, SampleWriter};
