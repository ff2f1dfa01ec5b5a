//! Castle Core - Window and visitor simulation engine
//!
//! A row of numbered windows, each with an independent left and right half,
//! is walked by one visitor per window. Every visitor applies a single rule
//! chosen by its id. This crate owns the window model, the rule table, the
//! simulation engine and the read-only queries over any window sequence.
//! Presentation is left to consumers such as `castle-cli`.

pub mod config;
pub mod queries;
pub mod simulation;
pub mod tracing_setup;
pub mod visitor;
pub mod window;

// Re-export main types for convenient access
pub use config::CastleConfig;
pub use queries::{StatusTally, adjacency_winners, fully_open_ids, status_tally, validate_windows};
pub use simulation::{CastleSimulation, MAX_WINDOW_COUNT};
pub use visitor::{Visitor, VisitorRule};
pub use window::{Window, WindowId, WindowStatus};

/// Errors that can bubble up from any Castle operation.
///
/// Only configuration and malformed input are possible failures; the
/// simulation itself is total over well-formed sequences.
#[derive(Debug, thiserror::Error)]
pub enum CastleError {
    #[error("Invalid window count: {count} (must be between 1 and {max})", max = MAX_WINDOW_COUNT)]
    InvalidWindowCount { count: usize },

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("Window sequence has {actual} windows, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Window id {id} appears more than once")]
    DuplicateWindowId { id: WindowId },

    #[error("Window at position {position} has id {found}, expected {expected}")]
    NonContiguousWindowIds {
        position: usize,
        expected: WindowId,
        found: WindowId,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CastleError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            CastleError::InvalidWindowCount { .. } => {
                format!("The castle needs between 1 and {MAX_WINDOW_COUNT} windows")
            }
            CastleError::Configuration { reason } => format!("Invalid settings: {reason}"),
            CastleError::LengthMismatch { expected, .. } => {
                format!("Expected exactly {expected} windows")
            }
            CastleError::DuplicateWindowId { id } => format!("Window {id} is listed twice"),
            CastleError::NonContiguousWindowIds { expected, .. } => {
                format!("Window {expected} is missing or out of order")
            }
            CastleError::Io(_) => "File system error occurred".to_string(),
        }
    }

    /// Checks if this error is due to user input validation.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CastleError::InvalidWindowCount { .. } | CastleError::Configuration { .. }
        )
    }

    /// Checks if this error describes a malformed window sequence.
    pub fn is_sequence_error(&self) -> bool {
        matches!(
            self,
            CastleError::LengthMismatch { .. }
                | CastleError::DuplicateWindowId { .. }
                | CastleError::NonContiguousWindowIds { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CastleError>;
