//! Validated probe configuration.

use std::time::Duration;

use url::Url;

use super::validation::{ConfigError, parse_frequency, parse_target, validate_frequency};

/// Target and frequency for a probe loop.
///
/// A `ProbeConfig` can only be built through validation, so holding one
/// means the URL has a scheme and the frequency is at least
/// [`MIN_FREQUENCY`](super::MIN_FREQUENCY).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    target: Url,
    frequency: Duration,
}

impl ProbeConfig {
    /// Create a configuration from an already parsed target.
    ///
    /// # Errors
    /// Returns `ConfigError::BelowMinimum` if `frequency` is too short.
    pub fn new(target: Url, frequency: Duration) -> Result<Self, ConfigError> {
        Ok(Self {
            target,
            frequency: validate_frequency(frequency)?,
        })
    }

    /// Build a configuration from the two positional arguments.
    ///
    /// The URL is checked before the frequency, so a bad URL is reported even
    /// when the frequency is also wrong.
    pub fn from_args(url: &str, frequency: &str) -> Result<Self, ConfigError> {
        let target = parse_target(url)?;
        let frequency = parse_frequency(frequency)?;
        Self::new(target, frequency)
    }

    /// The URL being probed.
    pub fn target(&self) -> &Url {
        &self.target
    }

    /// Interval between probes.
    pub fn frequency(&self) -> Duration {
        self.frequency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIN_FREQUENCY;

    #[test]
    fn test_probe_config_from_args() {
        let config = ProbeConfig::from_args("https://example.com", "1s").unwrap();
        assert_eq!(config.target().as_str(), "https://example.com/");
        assert_eq!(config.frequency(), Duration::from_secs(1));
    }

    #[test]
    fn test_probe_config_minimum_frequency_accepted() {
        let config = ProbeConfig::from_args("http://127.0.0.1:8080/ping", "500ms").unwrap();
        assert_eq!(config.frequency(), MIN_FREQUENCY);
    }

    #[test]
    fn test_probe_config_rejects_short_frequency() {
        let result = ProbeConfig::from_args("https://example.com", "499ms");
        assert_eq!(
            result,
            Err(ConfigError::BelowMinimum(Duration::from_millis(499)))
        );
    }

    #[test]
    fn test_probe_config_url_checked_first() {
        let result = ProbeConfig::from_args("example.com", "nope");
        assert_eq!(result, Err(ConfigError::MissingScheme));
    }

    #[test]
    fn test_probe_config_invalid_duration() {
        let result = ProbeConfig::from_args("https://example.com", "fast");
        assert_eq!(result, Err(ConfigError::InvalidDuration("fast".to_string())));
    }

    #[test]
    fn test_probe_config_negative_frequency() {
        let result = ProbeConfig::from_args("https://example.com", "-1s");
        assert_eq!(
            result,
            Err(ConfigError::NegativeFrequency(Duration::from_secs(1)))
        );
    }

    #[test]
    fn test_probe_config_new_validates() {
        let url = Url::parse("https://example.com").unwrap();
        assert!(ProbeConfig::new(url.clone(), Duration::from_millis(100)).is_err());
        assert!(ProbeConfig::new(url, Duration::from_secs(5)).is_ok());
    }
}
