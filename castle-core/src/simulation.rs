//! Simulation engine.
//!
//! Holds the canonical starting row and the visitor roster, and runs visitor
//! passes over any window sequence handed to it. Passes work on a copy: the
//! caller's sequence is never modified.

use tracing::debug;

use crate::config::SimulationConfig;
use crate::queries::{self, StatusTally};
use crate::visitor::Visitor;
use crate::window::{Window, WindowId};
use crate::{CastleError, Result};

/// Largest supported window count. A pass is quadratic in the count.
pub const MAX_WINDOW_COUNT: usize = 10_000;

/// Castle simulation with a fixed number of windows and visitors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastleSimulation {
    initial_windows: Vec<Window>,
    visitors: Vec<Visitor>,
}

impl CastleSimulation {
    /// Creates a simulation with `count` windows and `count` visitors.
    ///
    /// # Errors
    ///
    /// - `CastleError::InvalidWindowCount` - If `count` is zero or above `MAX_WINDOW_COUNT`
    pub fn new(count: usize) -> Result<Self> {
        let mut simulation = Self {
            initial_windows: Vec::new(),
            visitors: Vec::new(),
        };
        simulation.setup(count)?;
        Ok(simulation)
    }

    /// Creates a simulation sized by `config`.
    ///
    /// # Errors
    ///
    /// - `CastleError::InvalidWindowCount` - If the configured count is out of range
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        Self::new(config.window_count)
    }

    /// Rebuilds the canonical starting state: windows `1..=count`, all open,
    /// and visitors `1..=count`.
    ///
    /// On error the previous state is kept.
    ///
    /// # Errors
    ///
    /// - `CastleError::InvalidWindowCount` - If `count` is zero or above `MAX_WINDOW_COUNT`
    pub fn setup(&mut self, count: usize) -> Result<()> {
        if !(1..=MAX_WINDOW_COUNT).contains(&count) {
            return Err(CastleError::InvalidWindowCount { count });
        }

        self.initial_windows = (1..=count).map(Window::new).collect();
        self.visitors = (1..=count).map(Visitor::new).collect();

        debug!(window_count = count, "Castle simulation set up");
        Ok(())
    }

    /// Number of windows (and visitors) in this simulation.
    pub fn window_count(&self) -> usize {
        self.initial_windows.len()
    }

    pub fn visitors(&self) -> &[Visitor] {
        &self.visitors
    }

    /// The canonical starting row.
    pub fn initial_windows(&self) -> &[Window] {
        &self.initial_windows
    }

    /// Fresh copy of the canonical starting row.
    pub fn reset_windows(&self) -> Vec<Window> {
        self.initial_windows.clone()
    }

    fn last_visitor_id(&self) -> WindowId {
        self.visitors.last().map_or(0, Visitor::id)
    }

    /// Runs every visitor, in id order, over a copy of `windows`.
    ///
    /// Each visitor sees the state left by the previous one. `windows` is
    /// expected to hold ids `1..=window_count()`; use
    /// [`try_run_visitor_pass`](Self::try_run_visitor_pass) for input that
    /// has not been checked.
    pub fn run_visitor_pass(&self, windows: &[Window]) -> Vec<Window> {
        let mut processed = windows.to_vec();
        let last_id = self.last_visitor_id();

        for visitor in &self.visitors {
            visitor.visit(&mut processed, last_id);
        }

        debug!(
            visitors = self.visitors.len(),
            open = queries::fully_open_ids(&processed).len(),
            "Visitor pass complete"
        );
        processed
    }

    /// Validates `windows` against this simulation, then runs a pass.
    ///
    /// # Errors
    ///
    /// - `CastleError::LengthMismatch` - Wrong number of windows
    /// - `CastleError::DuplicateWindowId` - An id appears twice
    /// - `CastleError::NonContiguousWindowIds` - Ids are not `1..=N` in order
    pub fn try_run_visitor_pass(&self, windows: &[Window]) -> Result<Vec<Window>> {
        queries::validate_windows(windows, self.window_count())?;
        Ok(self.run_visitor_pass(windows))
    }

    /// Runs `passes` consecutive visitor passes, each over the previous output.
    pub fn run_passes(&self, windows: &[Window], passes: usize) -> Vec<Window> {
        let mut current = windows.to_vec();
        for _ in 0..passes {
            current = self.run_visitor_pass(&current);
        }
        current
    }

    pub fn status_tally(&self, windows: &[Window]) -> StatusTally {
        queries::status_tally(windows)
    }

    pub fn adjacency_winners(&self, windows: &[Window]) -> Vec<WindowId> {
        queries::adjacency_winners(windows)
    }

    pub fn fully_open_ids(&self, windows: &[Window]) -> Vec<WindowId> {
        queries::fully_open_ids(windows)
    }
}
