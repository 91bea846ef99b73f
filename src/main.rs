//! httping Binary Entry Point
//!
//! Probes one URL at a fixed frequency and prints a CSV row per sample.
//! Core functionality is provided by the `httping` library crate.

use std::future::Future;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use httping::output::format_duration;
use httping::{ConfigError, HttpProbe, ProbeConfig, Prober, SampleWriter};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// httping - HTTP latency sampler
#[derive(Parser, Debug)]
#[command(name = "httping", version, about, long_about = None)]
struct Cli {
    /// Absolute URL to probe, including the scheme (e.g. https://example.com)
    url: String,

    /// Time between probes (e.g. 1s, 500ms, 1m30s); minimum 500ms
    #[arg(allow_hyphen_values = true)]
    frequency: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the CSV stream.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{}", ConfigError::ArgumentCount);
            return ExitCode::FAILURE;
        }
    };

    let config = match ProbeConfig::from_args(&cli.url, &cli.frequency) {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Stdout may be the thing that failed; never report there.
            tracing::error!(error = %e, "httping stopped");
            let _ = writeln!(std::io::stderr(), "{e}");
            ExitCode::FAILURE
        }
    }
}

/// Probe until interrupted, writing each sample to stdout.
async fn run(config: ProbeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let cancel = CancellationToken::new();
    tokio::spawn(shutdown_signal(cancel.clone())?);

    let probe = HttpProbe::new(&config)?;
    let mut writer = SampleWriter::new(std::io::stdout());
    writer.write_header()?;

    tracing::info!(
        url = %config.target(),
        frequency = %format_duration(config.frequency()),
        "Probing, press Ctrl+C to stop"
    );

    let mut samples = Prober::new(probe, &config).start(cancel.clone());
    while let Some(sample) = samples.recv().await {
        if let Err(e) = writer.write_sample(&sample) {
            cancel.cancel();
            return Err(e.into());
        }
    }

    let rows = writer.rows();
    writer.finish()?;
    tracing::info!(rows, "Shutdown complete");
    Ok(())
}

/// Register Ctrl+C and SIGTERM handlers.
///
/// Handlers are armed when this returns, not when the future is first
/// polled. The future cancels `token` once either signal arrives.
#[cfg(unix)]
fn shutdown_signal(
    token: CancellationToken,
) -> std::io::Result<impl Future<Output = ()> + Send + 'static> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    Ok(async move {
        tokio::select! {
            _ = interrupt.recv() => {
                tracing::info!("Received Ctrl+C signal");
            }
            _ = terminate.recv() => {
                tracing::info!("Received terminate signal");
            }
        }
        token.cancel();
    })
}

/// Register the Ctrl+C handler.
#[cfg(not(unix))]
fn shutdown_signal(
    token: CancellationToken,
) -> std::io::Result<impl Future<Output = ()> + Send + 'static> {
    let mut ctrl_c = tokio::signal::windows::ctrl_c()?;

    Ok(async move {
        ctrl_c.recv().await;
        tracing::info!("Received Ctrl+C signal");
        token.cancel();
    })
}
