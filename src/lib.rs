//! httping - HTTP Latency Sampler
//!
//! This crate probes a single HTTP endpoint at a fixed interval and streams
//! one [`Sample`] per tick (timestamp, status code, latency). It can be used
//! as a library, or run as the `httping` binary which writes the samples to
//! standard output as CSV.
//!
//! # Architecture
//!
//! - **Config**: Argument validation into a [`ProbeConfig`]
//! - **Probe**: The [`Probe`] seam, its reqwest-backed [`HttpProbe`], and the
//!   ticking [`Prober`] loop
//! - **Output**: CSV rendering of samples via [`SampleWriter`]
//!
//! # Limitations
//!
//! Requests are sent without a timeout. A server that accepts the connection
//! and never answers stalls the loop until it does, and shutdown waits for
//! the in-flight request to return.
//!
//! # Example
//!
//! ```rust,no_run
//! use httping::{HttpProbe, ProbeConfig, Prober};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProbeConfig::from_args("https://example.com", "1s")?;
//! let probe = HttpProbe::new(&config)?;
//! let cancel = CancellationToken::new();
//!
//! let mut samples = Prober::new(probe, &config).start(cancel.clone());
//! while let Some(sample) = samples.recv().await {
//!     println!("{} {:?}", sample.status_code, sample.latency);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod output;
pub mod probe;
mod sample;

pub use config::{ConfigError, MIN_FREQUENCY, ProbeConfig};
pub use output::{OutputError, SampleWriter};
pub use probe::{HttpProbe, Probe, ProbeError, Prober};
pub use sample::{STATUS_UNAVAILABLE, Sample};
