//! Read-only queries over a window sequence.
//!
//! These functions accept any sequence, not just one produced by the engine,
//! and never mutate their input.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::window::{Window, WindowId, WindowStatus};
use crate::{CastleError, Result};

/// Number of windows in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusTally {
    pub open: usize,
    pub closed: usize,
    pub left_only: usize,
    pub right_only: usize,
}

impl StatusTally {
    /// Total number of windows counted.
    pub fn total(&self) -> usize {
        self.open + self.closed + self.left_only + self.right_only
    }
}

impl fmt::Display for StatusTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Open: {}", self.open)?;
        writeln!(f, "Closed: {}", self.closed)?;
        writeln!(f, "Left open: {}", self.left_only)?;
        write!(f, "Right open: {}", self.right_only)
    }
}

/// Partitions `windows` by status.
pub fn status_tally(windows: &[Window]) -> StatusTally {
    windows.iter().fold(StatusTally::default(), |mut tally, window| {
        match window.status() {
            WindowStatus::Open => tally.open += 1,
            WindowStatus::Closed => tally.closed += 1,
            WindowStatus::LeftOnly => tally.left_only += 1,
            WindowStatus::RightOnly => tally.right_only += 1,
        }
        tally
    })
}

/// Ids of open windows whose existing neighbors are all closed.
///
/// Neighbors are found by id (`id - 1` and `id + 1`), not by position. A
/// neighbor that does not exist satisfies its side.
pub fn adjacency_winners(windows: &[Window]) -> Vec<WindowId> {
    let status_by_id: HashMap<WindowId, WindowStatus> = windows
        .iter()
        .map(|window| (window.id(), window.status()))
        .collect();

    let neighbor_closed = |id: Option<WindowId>| {
        id.and_then(|id| status_by_id.get(&id))
            .is_none_or(|status| *status == WindowStatus::Closed)
    };

    windows
        .iter()
        .filter(|window| window.is_open())
        .filter(|window| {
            neighbor_closed(window.id().checked_sub(1))
                && neighbor_closed(window.id().checked_add(1))
        })
        .map(Window::id)
        .collect()
}

/// Ids of every open window, in input order.
pub fn fully_open_ids(windows: &[Window]) -> Vec<WindowId> {
    windows
        .iter()
        .filter(|window| window.is_open())
        .map(Window::id)
        .collect()
}

/// Checks that `windows` holds exactly ids `1..=expected_count` in order.
///
/// # Errors
///
/// - `CastleError::LengthMismatch` - Wrong number of windows
/// - `CastleError::DuplicateWindowId` - An id appears twice
/// - `CastleError::NonContiguousWindowIds` - An id is missing or out of place
pub fn validate_windows(windows: &[Window], expected_count: usize) -> Result<()> {
    if windows.len() != expected_count {
        return Err(CastleError::LengthMismatch {
            expected: expected_count,
            actual: windows.len(),
        });
    }

    let mut seen = HashSet::with_capacity(windows.len());
    for window in windows {
        if !seen.insert(window.id()) {
            return Err(CastleError::DuplicateWindowId { id: window.id() });
        }
    }

    for (position, window) in windows.iter().enumerate() {
        let expected = position + 1;
        if window.id() != expected {
            return Err(CastleError::NonContiguousWindowIds {
                position,
                expected,
                found: window.id(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowStatus::{Closed, LeftOnly, Open, RightOnly};

    fn row(statuses: &[WindowStatus]) -> Vec<Window> {
        statuses
            .iter()
            .enumerate()
            .map(|(index, status)| {
                let (left, right) = match status {
                    Open => (true, true),
                    Closed => (false, false),
                    LeftOnly => (true, false),
                    RightOnly => (false, true),
                };
                Window::with_halves(index + 1, left, right)
            })
            .collect()
    }

    #[test]
    fn test_status_tally_counts_each_status() {
        let windows = row(&[Open, Closed, LeftOnly, RightOnly, Open, Closed, Open]);
        let tally = status_tally(&windows);

        assert_eq!(
            tally,
            StatusTally {
                open: 3,
                closed: 2,
                left_only: 1,
                right_only: 1,
            }
        );
        assert_eq!(tally.total(), windows.len());
    }

    #[test]
    fn test_status_tally_report_format() {
        let tally = StatusTally {
            open: 31,
            closed: 31,
            left_only: 2,
            right_only: 0,
        };
        assert_eq!(
            tally.to_string(),
            "Open: 31\nClosed: 31\nLeft open: 2\nRight open: 0"
        );
    }

    #[test]
    fn test_winners_with_boundary_neighbors() {
        let windows = row(&[Open, Closed, Open]);
        assert_eq!(adjacency_winners(&windows), vec![1, 3]);
        assert_eq!(fully_open_ids(&windows), vec![1, 3]);
    }

    #[test]
    fn test_single_window_is_its_own_winner() {
        assert_eq!(adjacency_winners(&row(&[Open])), vec![1]);
        assert!(adjacency_winners(&row(&[LeftOnly])).is_empty());
    }

    #[test]
    fn test_winner_requires_both_neighbors_closed() {
        let windows = row(&[Closed, Open, LeftOnly, Closed, Open, Closed, Open, Open]);
        assert_eq!(adjacency_winners(&windows), vec![5]);
        assert_eq!(fully_open_ids(&windows), vec![2, 5, 7, 8]);
    }

    #[test]
    fn test_winners_look_up_neighbors_by_id() {
        // Ids out of positional order: window 2 sits between 3 and 1.
        let windows = vec![
            Window::with_halves(3, false, false),
            Window::with_halves(2, true, true),
            Window::with_halves(1, false, false),
        ];
        assert_eq!(adjacency_winners(&windows), vec![2]);
    }

    #[test]
    fn test_queries_do_not_mutate_input() {
        let windows = row(&[Open, Closed, RightOnly, Open]);
        let snapshot = windows.clone();

        let queries = |windows: &[Window]| {
            (
                status_tally(windows),
                fully_open_ids(windows),
                adjacency_winners(windows),
            )
        };
        let first = queries(&windows);
        let second = queries(&windows);

        assert_eq!(first, second);
        assert_eq!(windows, snapshot);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(status_tally(&[]).total(), 0);
        assert!(adjacency_winners(&[]).is_empty());
        assert!(fully_open_ids(&[]).is_empty());
    }

    #[test]
    fn test_validate_windows() {
        let windows: Vec<Window> = (1..=4).map(Window::new).collect();
        assert!(validate_windows(&windows, 4).is_ok());

        assert!(matches!(
            validate_windows(&windows, 5),
            Err(CastleError::LengthMismatch {
                expected: 5,
                actual: 4
            })
        ));

        let duplicated = vec![Window::new(1), Window::new(2), Window::new(2)];
        assert!(matches!(
            validate_windows(&duplicated, 3),
            Err(CastleError::DuplicateWindowId { id: 2 })
        ));

        let gapped = vec![Window::new(1), Window::new(3), Window::new(4)];
        assert!(matches!(
            validate_windows(&gapped, 3),
            Err(CastleError::NonContiguousWindowIds {
                position: 1,
                expected: 2,
                found: 3
            })
        ));
    }
}
