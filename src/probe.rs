//! Probe Layer
//!
//! The ticking loop that turns probes into a stream of samples.
//!
//! # Architecture
//!
//! - [`Probe`]: Core trait for issuing a single request to the target
//! - [`HttpProbe`]: reqwest-backed GET probe
//! - [`Prober`]: Fixed-interval loop that hands samples off over a
//!   depth-1 channel until its cancellation token fires
//!
//! # Example
//!
//! ```rust,no_run
//! use httping::{HttpProbe, ProbeConfig, Prober};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProbeConfig::from_args("http://127.0.0.1:8080/healthz", "500ms")?;
//! let cancel = CancellationToken::new();
//! let mut samples = Prober::new(HttpProbe::new(&config)?, &config).start(cancel.clone());
//!
//! let first = samples.recv().await;
//! cancel.cancel();
//! # Ok(())
//! # }
//! ```

mod http;
mod prober;
mod traits;

pub use http::HttpProbe;
pub use prober::{HANDOFF_CAPACITY, Prober};
pub use traits::{Probe, ProbeError};
