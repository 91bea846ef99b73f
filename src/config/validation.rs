//! Configuration validation utilities.

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::output::format_duration;

/// Minimum allowed probe frequency (500 milliseconds).
pub const MIN_FREQUENCY: Duration = Duration::from_millis(500);

/// Configuration error types.
///
/// The `Display` text of each variant is what the binary prints before
/// exiting with status 1.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Wrong number of command-line arguments.
    #[error("two args required: httping <url> <frequency> (1s, 500ms, etc.)")]
    ArgumentCount,

    /// The target could not be parsed as a URL.
    #[error("{0} is not a valid url")]
    InvalidUrl(String),

    /// The target parsed but has no protocol scheme.
    #[error("protocol scheme required")]
    MissingScheme,

    /// The frequency is not a duration string.
    #[error("{0} is not a valid duration")]
    InvalidDuration(String),

    /// The frequency is shorter than [`MIN_FREQUENCY`].
    #[error(
        "{} is below the minimum frequency of {}",
        display_duration(.0),
        display_duration(&MIN_FREQUENCY)
    )]
    BelowMinimum(Duration),

    /// The frequency is negative; holds its magnitude.
    #[error(
        "-{} is below the minimum frequency of {}",
        display_duration(.0),
        display_duration(&MIN_FREQUENCY)
    )]
    NegativeFrequency(Duration),
}

fn display_duration(d: &Duration) -> String {
    format_duration(*d)
}

/// Parse duration string using humantime.
///
/// Supports `500ms`, `1s`, `1m30s`, `2h 30m`, etc. A bare number without a
/// unit is rejected.
///
/// # Examples
///
/// ```
/// use httping::config::parse_duration;
///
/// assert_eq!(parse_duration("1s").unwrap().as_millis(), 1000);
/// assert_eq!(parse_duration("500ms").unwrap().as_millis(), 500);
/// ```
pub fn parse_duration(s: &str) -> Result<Duration, ConfigError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidDuration(s.to_string()));
    }
    humantime::parse_duration(trimmed).map_err(|_| ConfigError::InvalidDuration(s.to_string()))
}

/// Parse the probe frequency.
///
/// Like [`parse_duration`], but a leading `-` is accepted so that negative
/// input is reported as below the minimum rather than as malformed.
pub fn parse_frequency(s: &str) -> Result<Duration, ConfigError> {
    let Some(magnitude) = s.trim().strip_prefix('-') else {
        return validate_frequency(parse_duration(s)?);
    };
    let magnitude =
        parse_duration(magnitude).map_err(|_| ConfigError::InvalidDuration(s.to_string()))?;
    if magnitude.is_zero() {
        return Err(ConfigError::BelowMinimum(Duration::ZERO));
    }
    Err(ConfigError::NegativeFrequency(magnitude))
}

/// Parse the probe target.
///
/// Input without a scheme (`example.com`) is reported as
/// [`ConfigError::MissingScheme`]; anything else the URL parser rejects is
/// [`ConfigError::InvalidUrl`].
pub fn parse_target(s: &str) -> Result<Url, ConfigError> {
    match Url::parse(s) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Err(ConfigError::MissingScheme),
        Err(_) => Err(ConfigError::InvalidUrl(s.to_string())),
    }
}

/// Reject frequencies below [`MIN_FREQUENCY`].
pub(crate) fn validate_frequency(frequency: Duration) -> Result<Duration, ConfigError> {
    if frequency < MIN_FREQUENCY {
        return Err(ConfigError::BelowMinimum(frequency));
    }
    Ok(frequency)
}
