//! Castle CLI - Command-line interface
//!
//! Renders the window grid and exposes the engine's actions as subcommands
//! or as an interactive session.

mod commands;
mod interactive;
mod render;
mod session;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use castle_core::{CastleConfig, CastleError};
use castle_core::tracing_setup::{CliLogLevel, init_tracing};
use clap::Parser;
use tracing::debug;

/// Main CLI structure for Castle.
#[derive(Parser)]
#[command(name = "castle")]
#[command(about = "Simulates visitors opening and closing castle windows")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,

    /// Number of windows (and visitors)
    #[arg(short, long, global = true)]
    windows: Option<usize>,

    /// Windows per grid row
    #[arg(short, long, global = true)]
    columns: Option<usize>,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Console log level
    #[arg(long, value_enum, default_value_t = CliLogLevel::Warn, global = true)]
    log_level: CliLogLevel,

    /// Directory for a full trace log of this run
    #[arg(long, global = true)]
    logs_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("Run failed: {err:#}");
            eprintln!("Error: {}", error_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing(cli.log_level.as_tracing_level(), cli.logs_dir.as_deref())?;

    let config = load_config(&cli)?;
    debug!(?config, "Configuration loaded");

    commands::handle_command(cli.command, &config, cli.json)
}

/// Text shown to the user when a run fails.
///
/// Bad input gets the friendly message alone. A malformed window sequence
/// can only come from a bug, so it keeps the full detail.
fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<CastleError>() {
        Some(castle) if castle.is_user_error() => castle.user_message(),
        Some(castle) if castle.is_sequence_error() => {
            format!("{} (internal error: {castle})", castle.user_message())
        }
        _ => format!("{err:#}"),
    }
}

/// Builds the configuration from file or environment, then applies flags.
fn load_config(cli: &Cli) -> anyhow::Result<CastleConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config_file(path)?,
        None => CastleConfig::from_env(),
    };

    if let Some(windows) = cli.windows {
        config.simulation.window_count = windows;
    }
    if let Some(columns) = cli.columns {
        config.display.columns = columns;
    }

    config.validate()?;
    Ok(config)
}

fn read_config_file(path: &Path) -> anyhow::Result<CastleConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}
