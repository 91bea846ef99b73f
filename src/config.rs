//! Configuration module for httping.
//!
//! Turns the raw command-line arguments into a validated [`ProbeConfig`]:
//! - Target URL (absolute, with a scheme)
//! - Probe frequency (humantime syntax, at least [`MIN_FREQUENCY`])

mod probe;
mod validation;

pub use probe::ProbeConfig;
pub use validation::{ConfigError, MIN_FREQUENCY, parse_duration, parse_frequency, parse_target};
