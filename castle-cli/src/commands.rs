//! CLI command implementations

use std::io::{self, Write};

use castle_core::{CastleConfig, CastleSimulation};
use clap::Subcommand;
use tracing::info;

use crate::interactive;
use crate::render::GridView;
use crate::session::{Action, Session};

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the initial window grid
    Show,
    /// Run visitor passes and show the resulting grid
    Process {
        /// Number of consecutive passes
        #[arg(short, long, default_value = "1")]
        passes: usize,
    },
    /// Count windows by status after visitor passes
    Status {
        /// Number of consecutive passes
        #[arg(short, long, default_value = "1")]
        passes: usize,
    },
    /// List open windows whose neighbors are all closed
    Winners {
        /// Number of consecutive passes
        #[arg(short, long, default_value = "1")]
        passes: usize,
    },
    /// List every fully open window
    OpenWinners {
        /// Number of consecutive passes
        #[arg(short, long, default_value = "1")]
        passes: usize,
    },
    /// Start an interactive session on the window grid
    Interactive,
}

impl Commands {
    /// Passes to run before the command's action, and the action itself.
    fn plan(&self) -> Option<(usize, Action)> {
        match *self {
            Commands::Show => Some((0, Action::Show)),
            Commands::Process { passes } => Some((passes, Action::Show)),
            Commands::Status { passes } => Some((passes, Action::Status)),
            Commands::Winners { passes } => Some((passes, Action::Winners)),
            Commands::OpenWinners { passes } => Some((passes, Action::OpenWinners)),
            Commands::Interactive => None,
        }
    }
}

/// Handle the CLI command
///
/// # Errors
/// - `CastleError::InvalidWindowCount` - The configured window count is zero
/// - I/O errors writing to stdout or reading stdin
pub fn handle_command(command: Commands, config: &CastleConfig, json: bool) -> anyhow::Result<()> {
    let simulation = CastleSimulation::from_config(&config.simulation)?;
    let view = GridView::from_config(&config.display);
    let mut session = Session::new(simulation, view, json);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command.plan() {
        Some((passes, action)) => {
            run_once(&mut session, passes, action, &mut out)?;
        }
        None => {
            info!(
                window_count = config.simulation.window_count,
                "Starting interactive session"
            );
            let stdin = io::stdin();
            interactive::run(&mut session, stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}

/// Runs `passes` visitor passes, then writes the output of `action`.
///
/// # Errors
/// - Errors from the session or from writing to `out`
pub fn run_once<W: Write>(
    session: &mut Session,
    passes: usize,
    action: Action,
    out: &mut W,
) -> anyhow::Result<()> {
    info!(passes, ?action, "Running command");
    session.advance(passes)?;
    writeln!(out, "{}", session.perform(action)?)?;
    Ok(())
}
