//! Logging initialization

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, RuntimeConfig};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter directive.
/// Calling this twice is harmless; the second install is ignored.
pub fn init_logging(config: &RuntimeConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.with_target(false).try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(
            environment = ?config.environment,
            format = ?config.log_format,
            "Logging initialized"
        );
    }
}
