//! Tracing setup for Castle
//!
//! Console output follows the level the user picked (or `RUST_LOG`). When a
//! logs directory is given, a second layer writes every event at TRACE level to
//! `castle-last-run.log`, overwriting the previous run.

use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::{CastleError, Result};

/// File name of the per-run debug log.
pub const LOG_FILE_NAME: &str = "castle-last-run.log";

/// Initialize tracing with console output and an optional debug log file.
///
/// Returns the path of the debug log when one was opened.
///
/// # Errors
///
/// - `CastleError::Io` - If the logs directory or log file cannot be created
/// - `CastleError::Configuration` - If a global subscriber is already installed
pub fn init_tracing(console_level: Level, logs_dir: Option<&Path>) -> Result<Option<PathBuf>> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level.to_string()));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let (file_layer, log_file_path) = match logs_dir {
        Some(logs_path) => {
            create_dir_all(logs_path)?;
            let log_file_path = logs_path.join(LOG_FILE_NAME);
            let log_file = File::create(&log_file_path)?;

            let layer = fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false) // No color codes in files
                .with_writer(Mutex::new(log_file))
                .with_filter(EnvFilter::new("trace"));

            (Some(layer), Some(log_file_path))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CastleError::Configuration {
            reason: format!("tracing already initialized: {e}"),
        })?;

    match &log_file_path {
        Some(path) => tracing::debug!(
            "Tracing initialized: console={}, debug_file={}",
            console_level,
            path.display()
        ),
        None => tracing::debug!("Tracing initialized: console={}", console_level),
    }

    Ok(log_file_path)
}

/// CLI log levels for user control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CliLogLevel {
    /// Only error messages
    Error,
    /// Warning and error messages
    #[default]
    Warn,
    /// Informational, warning, and error messages
    Info,
    /// Debug, informational, warning, and error messages
    Debug,
    /// All messages including detailed tracing
    Trace,
}

impl CliLogLevel {
    /// Converts CLI log level to tracing Level enum.
    ///
    /// # Examples
    /// ```
    /// use castle_core::tracing_setup::CliLogLevel;
    ///
    /// let level = CliLogLevel::Info.as_tracing_level();
    /// assert_eq!(level, tracing::Level::INFO);
    /// ```
    pub fn as_tracing_level(self) -> Level {
        match self {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
            CliLogLevel::Trace => Level::TRACE,
        }
    }
}
