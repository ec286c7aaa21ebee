use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("unable to install log subscriber: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Quiet unless `--verbose` was given.
pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

/// Filter built from the flag alone; the environment is not consulted.
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(log_level(verbose).into())
        .parse_lossy("")
}

/// Install the stderr subscriber.
pub fn init(verbose: bool) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
