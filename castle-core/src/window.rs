//! Window state model.
//!
//! A window has two halves that open and close independently. Its four-way
//! status is stored alongside them but only rewritten by the mutators, which
//! recompute it from the halves after every change.

use std::fmt;

use serde::Serialize;

/// One-based window identifier, stable for a window's lifetime.
pub type WindowId = usize;

/// Combined state of a window's two halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowStatus {
    /// Both halves open
    Open,
    /// Both halves closed
    Closed,
    /// Only the left half open
    LeftOnly,
    /// Only the right half open
    RightOnly,
}

impl WindowStatus {
    /// Derives the status from the state of both halves.
    pub fn from_halves(left_opened: bool, right_opened: bool) -> Self {
        match (left_opened, right_opened) {
            (true, true) => Self::Open,
            (false, false) => Self::Closed,
            (true, false) => Self::LeftOnly,
            (false, true) => Self::RightOnly,
        }
    }

    /// Single-letter code used by the grid view.
    pub fn symbol(self) -> char {
        match self {
            Self::Open => 'A',
            Self::Closed => 'C',
            Self::LeftOnly => 'I',
            Self::RightOnly => 'D',
        }
    }
}

impl fmt::Display for WindowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::LeftOnly => write!(f, "left open"),
            Self::RightOnly => write!(f, "right open"),
        }
    }
}

/// A single numbered window.
///
/// The halves are private so every mutation goes through a method that
/// recomputes `status` before returning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Window {
    id: WindowId,
    left_opened: bool,
    right_opened: bool,
    status: WindowStatus,
}

impl Window {
    /// Creates a window with both halves open.
    pub fn new(id: WindowId) -> Self {
        Self::with_halves(id, true, true)
    }

    /// Creates a window with the given halves.
    pub fn with_halves(id: WindowId, left_opened: bool, right_opened: bool) -> Self {
        Self {
            id,
            left_opened,
            right_opened,
            status: WindowStatus::from_halves(left_opened, right_opened),
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn left_opened(&self) -> bool {
        self.left_opened
    }

    pub fn right_opened(&self) -> bool {
        self.right_opened
    }

    pub fn status(&self) -> WindowStatus {
        self.status
    }

    /// Returns true when both halves are open.
    pub fn is_open(&self) -> bool {
        self.status == WindowStatus::Open
    }

    /// Returns true when both halves are closed.
    pub fn is_closed(&self) -> bool {
        self.status == WindowStatus::Closed
    }

    /// Re-derives `status` from the two halves.
    pub fn recompute_status(&mut self) {
        self.status = WindowStatus::from_halves(self.left_opened, self.right_opened);
    }

    pub fn open_left(&mut self) {
        self.left_opened = true;
        self.recompute_status();
    }

    pub fn close_left(&mut self) {
        self.left_opened = false;
        self.recompute_status();
    }

    pub fn open_right(&mut self) {
        self.right_opened = true;
        self.recompute_status();
    }

    pub fn close_right(&mut self) {
        self.right_opened = false;
        self.recompute_status();
    }

    /// Flips the right half.
    pub fn toggle_right(&mut self) {
        self.right_opened = !self.right_opened;
        self.recompute_status();
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.status.symbol())
    }
}
