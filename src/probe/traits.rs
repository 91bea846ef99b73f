//! Core probe trait and errors.

use thiserror::Error;

/// Errors that can occur while probing.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The request could not be completed (DNS, connect, TLS, protocol).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// Any other failure reported by a probe implementation.
    #[error("probe failed: {0}")]
    Other(String),
}

/// A single request against the configured target.
///
/// # Error Handling
///
/// `probe()` returns `Err` for any failure that prevented a status code from
/// being received. The loop records such failures as samples with
/// [`STATUS_UNAVAILABLE`](crate::STATUS_UNAVAILABLE) and keeps going; an
/// error never stops probing. Non-2xx responses are not errors: they are
/// valid observations and come back as `Ok(status)`.
#[async_trait::async_trait]
pub trait Probe: Send + Sync + 'static {
    /// Target description used in log fields.
    fn target(&self) -> &str;

    /// Issue one request and return the response status code.
    ///
    /// Implementations must not retry. Latency is measured by the caller
    /// around this call.
    async fn probe(&self) -> Result<u16, ProbeError>;
}
