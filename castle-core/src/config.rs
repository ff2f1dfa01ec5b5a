//! Centralized configuration for Castle.
//!
//! Defaults reproduce the reference castle: 64 windows shown four per row.
//! The engine only ever receives plain values; reading the environment is
//! left to the binary.

use serde::{Deserialize, Serialize};

use crate::simulation::MAX_WINDOW_COUNT;
use crate::{CastleError, Result};

/// Central configuration for all Castle components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastleConfig {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
}

/// Simulation sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of windows, and therefore visitors
    pub window_count: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { window_count: 64 }
    }
}

/// Grid presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Windows per grid row
    pub columns: usize,
    /// Whether to print the status letter legend under the grid
    pub show_legend: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            show_legend: true,
        }
    }
}

impl CastleConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(count) = std::env::var("CASTLE_WINDOW_COUNT") {
            if let Ok(count) = count.parse::<usize>() {
                config.simulation.window_count = count;
            }
        }

        if let Ok(columns) = std::env::var("CASTLE_GRID_COLUMNS") {
            if let Ok(columns) = columns.parse::<usize>() {
                config.display.columns = columns;
            }
        }

        config
    }

    /// Checks that every setting is usable.
    ///
    /// # Errors
    ///
    /// - `CastleError::Configuration` - If the window count is out of range or
    ///   the column count is zero
    pub fn validate(&self) -> Result<()> {
        if self.simulation.window_count == 0 {
            return Err(CastleError::Configuration {
                reason: "window_count must be at least 1".to_string(),
            });
        }

        if self.simulation.window_count > MAX_WINDOW_COUNT {
            return Err(CastleError::Configuration {
                reason: format!("window_count must be at most {MAX_WINDOW_COUNT}"),
            });
        }

        if self.display.columns == 0 {
            return Err(CastleError::Configuration {
                reason: "columns must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
