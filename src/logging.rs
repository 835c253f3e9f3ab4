//! Set up of the `tracing` subscriber used by the binaries.

use std::{fs::OpenOptions, path::Path, sync::Arc};

use tracing_subscriber::{EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::Error;

/// Install the global subscriber.
///
/// Logs go to stdout filtered by `RUST_LOG` (default `info`). If `log_file`
/// is given, everything at `debug` and above is also appended to that file.
///
/// # Errors
/// Returns [Error::Io] if the log file cannot be opened.
pub fn setup_logging(log_file: Option<&Path>) -> Result<(), Error> {
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    let debug_log = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|error| Error::Io(path.display().to_string(), error.to_string()))?;

            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file))
                    .with_filter(filter::LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log)
        .init();

    Ok(())
}
