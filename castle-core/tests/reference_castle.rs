//! End-to-end runs of the reference 64-window castle.

use castle_core::{
    CastleConfig, CastleSimulation, StatusTally, Window, WindowId, WindowStatus,
    adjacency_winners, fully_open_ids, status_tally,
};

fn reference_simulation() -> CastleSimulation {
    CastleSimulation::from_config(&CastleConfig::default().simulation).unwrap()
}

fn expected_after_first_pass(id: WindowId) -> WindowStatus {
    match id {
        1 | 2 => WindowStatus::LeftOnly,
        id if id % 2 == 1 => WindowStatus::Open,
        _ => WindowStatus::Closed,
    }
}

#[test]
fn test_reference_initial_row() {
    let simulation = reference_simulation();
    let windows = simulation.initial_windows();

    assert_eq!(windows.len(), 64);
    assert_eq!(windows.first().map(Window::id), Some(1));
    assert_eq!(windows.last().map(Window::id), Some(64));
    assert_eq!(status_tally(windows).open, 64);
}

#[test]
fn test_reference_single_pass() {
    let simulation = reference_simulation();
    let result = simulation.run_visitor_pass(simulation.initial_windows());

    for window in &result {
        assert_eq!(
            window.status(),
            expected_after_first_pass(window.id()),
            "window {}",
            window.id()
        );
    }

    assert_eq!(
        status_tally(&result),
        StatusTally {
            open: 31,
            closed: 31,
            left_only: 2,
            right_only: 0,
        }
    );

    let expected_winners: Vec<WindowId> = (5..=63).step_by(2).collect();
    assert_eq!(adjacency_winners(&result), expected_winners);

    let expected_open: Vec<WindowId> = (3..=63).step_by(2).collect();
    assert_eq!(fully_open_ids(&result), expected_open);
}

#[test]
fn test_reference_second_pass_reopens_first_window() {
    let simulation = reference_simulation();
    let first = simulation.run_visitor_pass(simulation.initial_windows());
    let second = simulation.run_visitor_pass(&first);

    assert_eq!(second[0].status(), WindowStatus::Open);
    assert_eq!(second[1].status(), WindowStatus::LeftOnly);
    assert_eq!(second[2..], first[2..]);

    let tally = status_tally(&second);
    assert_eq!((tally.open, tally.closed, tally.left_only), (32, 31, 1));

    // Window 1 is open but its neighbor is left-open, so winners are unchanged.
    assert_eq!(adjacency_winners(&second), adjacency_winners(&first));
    assert_eq!(fully_open_ids(&second).first(), Some(&1));
}

#[test]
fn test_reset_restores_canonical_row() {
    let simulation = reference_simulation();
    let processed = simulation.run_passes(simulation.initial_windows(), 3);
    assert_ne!(processed.as_slice(), simulation.initial_windows());

    let reset = simulation.reset_windows();
    assert_eq!(reset.as_slice(), simulation.initial_windows());
    assert!(reset.iter().all(Window::is_open));
}
