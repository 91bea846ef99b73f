//! Fixed-interval probe loop.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::config::ProbeConfig;
use crate::probe::Probe;
use crate::{STATUS_UNAVAILABLE, Sample};

/// Capacity of the channel between the loop and its consumer.
pub const HANDOFF_CAPACITY: usize = 1;

/// Drives a [`Probe`] once per interval.
pub struct Prober<P> {
    probe: Arc<P>,
    interval: Duration,
}

impl<P: Probe> Prober<P> {
    /// Create a loop for `probe` ticking at the configured frequency.
    pub fn new(probe: P, config: &ProbeConfig) -> Self {
        Self {
            probe: Arc::new(probe),
            interval: config.frequency(),
        }
    }

    /// Spawn the loop and return the receiving end of the handoff channel.
    ///
    /// The first probe fires one interval after this call. The receiver
    /// yields `None` once `cancel` has fired; a probe still in flight at
    /// that point runs to completion and its sample is discarded. Dropping
    /// the receiver also stops the loop.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(self, cancel: CancellationToken) -> mpsc::Receiver<Sample> {
        let (tx, rx) = mpsc::channel(HANDOFF_CAPACITY);
        tokio::spawn(run_loop(self.probe, self.interval, tx, cancel));
        rx
    }
}

impl<P: Probe> std::fmt::Debug for Prober<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prober")
            .field("target", &self.probe.target())
            .field("interval", &self.interval)
            .finish()
    }
}

/// Maps monotonic instants onto wall-clock time.
///
/// Timestamps are derived from one wall-clock reading plus monotonic elapsed
/// time, so they increase with emission order even if the system clock is
/// stepped while the loop runs.
#[derive(Debug, Clone, Copy)]
struct ClockAnchor {
    wall: DateTime<Local>,
    mono: Instant,
}

impl ClockAnchor {
    fn now() -> Self {
        Self {
            wall: Local::now(),
            mono: Instant::now(),
        }
    }

    fn timestamp(&self, at: Instant) -> DateTime<Local> {
        match TimeDelta::from_std(at.duration_since(self.mono)) {
            Ok(offset) => self.wall + offset,
            Err(_) => Local::now(),
        }
    }
}

async fn run_loop<P: Probe>(
    probe: Arc<P>,
    interval: Duration,
    tx: mpsc::Sender<Sample>,
    cancel: CancellationToken,
) {
    let anchor = ClockAnchor::now();
    let mut ticker = tokio::time::interval_at(anchor.mono + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::info!(target_url = %probe.target(), ?interval, "Probe loop started");

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let sample = sample_once(probe.as_ref(), &anchor).await;

        if cancel.is_cancelled() {
            tracing::debug!(target_url = %probe.target(), "Discarding sample completed after cancellation");
            break;
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            sent = tx.send(sample) => {
                if sent.is_err() {
                    tracing::debug!("Sample receiver dropped");
                    break;
                }
            }
        }
    }

    tracing::info!(target_url = %probe.target(), "Probe loop stopped");
}

/// Run one probe and record its outcome.
async fn sample_once<P: Probe>(probe: &P, anchor: &ClockAnchor) -> Sample {
    let start = Instant::now();
    let result = probe.probe().await;
    let latency = start.elapsed();

    let status_code = match result {
        Ok(status) => status,
        Err(e) => {
            tracing::warn!(
                target_url = %probe.target(),
                error = %e,
                latency_ms = latency.as_millis(),
                "HTTP probe failed"
            );
            STATUS_UNAVAILABLE
        }
    };

    Sample::new(anchor.timestamp(start), status_code, latency)
}
