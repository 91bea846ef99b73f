//! HTTP endpoint probe.
//!
//! Sends a plain GET and reports the response status. The body is never
//! read, so the measured latency is time to response headers.

use reqwest::Client;
use url::Url;

use crate::config::ProbeConfig;
use crate::probe::{Probe, ProbeError};

/// User agent sent with every probe.
const USER_AGENT: &str = concat!("httping/", env!("CARGO_PKG_VERSION"));

/// HTTP GET probe.
///
/// The client is built without a request timeout: a server that never
/// answers blocks the probe until the connection is dropped.
pub struct HttpProbe {
    url: Url,
    client: Client,
}

impl HttpProbe {
    /// Create a new HTTP probe for the configured target.
    ///
    /// # Errors
    /// Returns `ProbeError::Client` if the HTTP client cannot be built.
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ProbeError::Client(e.to_string()))?;

        Ok(Self {
            url: config.target().clone(),
            client,
        })
    }
}

impl std::fmt::Debug for HttpProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpProbe")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl Probe for HttpProbe {
    fn target(&self) -> &str {
        self.url.as_str()
    }

    async fn probe(&self) -> Result<u16, ProbeError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status().as_u16();
        tracing::debug!(url = %self.url, status, "HTTP probe completed");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(url: &str) -> ProbeConfig {
        ProbeConfig::new(Url::parse(url).unwrap(), Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_http_probe_target() {
        let probe = HttpProbe::new(&config("https://example.com/health")).unwrap();
        assert_eq!(probe.target(), "https://example.com/health");
        assert!(format!("{probe:?}").contains("example.com"));
    }

    #[tokio::test]
    async fn test_http_probe_connection_refused() {
        // Bind then drop to get a port nobody listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let probe = HttpProbe::new(&config(&format!("http://{addr}/"))).unwrap();
        let err = probe.probe().await.unwrap_err();
        assert!(matches!(err, ProbeError::Request(_)));
        assert!(err.to_string().starts_with("request failed"));
    }

    #[tokio::test]
    async fn test_http_probe_unsupported_scheme() {
        let probe = HttpProbe::new(&config("ftp://example.com/file")).unwrap();
        assert!(probe.probe().await.is_err());
    }
}
