//! The window sequence currently on display and the actions that act on it.

use std::str::FromStr;

use castle_core::{CastleSimulation, Window, WindowId};
use tracing::debug;

use crate::render::{self, GridView};

/// User-selectable actions on the displayed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Render the displayed sequence
    Show,
    /// Run one visitor pass over the displayed sequence
    Process,
    /// Count displayed windows by status
    Status,
    /// Open windows whose neighbors are closed
    Winners,
    /// Every fully open window
    OpenWinners,
    /// Go back to the canonical starting row
    Reset,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "show" | "grid" => Ok(Action::Show),
            "process" | "perform" | "p" => Ok(Action::Process),
            "status" | "s" => Ok(Action::Status),
            "winners" | "w" => Ok(Action::Winners),
            "open" | "open-winners" | "o" => Ok(Action::OpenWinners),
            "reset" | "r" => Ok(Action::Reset),
            _ => Err(format!("Unknown action: '{s}'. Type 'help' for options")),
        }
    }
}

/// Holds the simulation and the sequence the user is looking at.
///
/// Every action feeds the displayed sequence to the engine as a fresh snapshot
/// and replaces it with the engine's output where the action produces one.
pub struct Session {
    simulation: CastleSimulation,
    windows: Vec<Window>,
    view: GridView,
    json: bool,
}

impl Session {
    pub fn new(simulation: CastleSimulation, view: GridView, json: bool) -> Self {
        let windows = simulation.reset_windows();
        Self {
            simulation,
            windows,
            view,
            json,
        }
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Runs `passes` visitor passes without rendering.
    ///
    /// # Errors
    /// - `CastleError` sequence errors if the displayed sequence is malformed
    pub fn advance(&mut self, passes: usize) -> anyhow::Result<()> {
        for _ in 0..passes {
            self.windows = self.simulation.try_run_visitor_pass(&self.windows)?;
        }
        debug!(passes, "Advanced displayed windows");
        Ok(())
    }

    /// Performs `action` and returns its rendered output.
    ///
    /// # Errors
    /// - `CastleError` sequence errors from a visitor pass
    /// - `serde_json::Error` if JSON output cannot be produced
    pub fn perform(&mut self, action: Action) -> anyhow::Result<String> {
        debug!(?action, "Performing action");
        match action {
            Action::Show => self.render_windows(),
            Action::Process => {
                self.advance(1)?;
                self.render_windows()
            }
            Action::Reset => {
                self.windows = self.simulation.reset_windows();
                self.render_windows()
            }
            Action::Status => {
                let tally = self.simulation.status_tally(&self.windows);
                if self.json {
                    Ok(render::status_json(&tally)?)
                } else {
                    Ok(render::render_status(&tally))
                }
            }
            Action::Winners => {
                let winners = self.simulation.adjacency_winners(&self.windows);
                self.render_ids(&winners)
            }
            Action::OpenWinners => {
                let winners = self.simulation.fully_open_ids(&self.windows);
                self.render_ids(&winners)
            }
        }
    }

    fn render_windows(&self) -> anyhow::Result<String> {
        if self.json {
            Ok(render::windows_json(&self.windows)?)
        } else {
            Ok(self.view.render_grid(&self.windows))
        }
    }

    fn render_ids(&self, ids: &[WindowId]) -> anyhow::Result<String> {
        if self.json {
            Ok(render::winners_json(ids)?)
        } else {
            Ok(render::render_winners(ids))
        }
    }
}
