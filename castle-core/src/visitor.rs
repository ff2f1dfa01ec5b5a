//! Visitors and the rule table that decides what each one does.
//!
//! Rule selection is an ordered list of predicates over the visitor id and the
//! highest visitor id in the roster. The first matching predicate wins, so
//! visitor 2 in a two-window castle opens right halves instead of toggling them.

use crate::window::{Window, WindowId};

/// A visitor walking past the castle. Ids run 1..=N alongside the windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Visitor {
    id: WindowId,
}

impl Visitor {
    pub fn new(id: WindowId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Selects this visitor's rule given the highest visitor id in the roster.
    pub fn rule(&self, last_id: WindowId) -> VisitorRule {
        VisitorRule::select(self.id, last_id)
    }

    /// Applies this visitor's rule to every window in order.
    pub fn visit(&self, windows: &mut [Window], last_id: WindowId) {
        self.rule(last_id).apply(self.id, windows);
    }
}

/// The five mutually exclusive mutations a visitor can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitorRule {
    /// Opens every left half
    OpenAllLeft,
    /// Opens the right half of every even-numbered window
    OpenEvenRight,
    /// Flips every right half
    ToggleAllRight,
    /// On multiples of the visitor id: right half opens, left half closes
    RightOnMultiples,
    /// On multiples of the visitor id: left half opens, right half closes
    LeftOnMultiples,
}

type RulePredicate = fn(WindowId, WindowId) -> bool;

fn is_first(id: WindowId, _last_id: WindowId) -> bool {
    id == 1
}

fn is_second(id: WindowId, _last_id: WindowId) -> bool {
    id == 2
}

fn is_last(id: WindowId, last_id: WindowId) -> bool {
    id == last_id
}

fn is_even(id: WindowId, _last_id: WindowId) -> bool {
    id % 2 == 0
}

fn always(_id: WindowId, _last_id: WindowId) -> bool {
    true
}

/// Evaluated top to bottom; first match wins.
const RULE_TABLE: [(RulePredicate, VisitorRule); 5] = [
    (is_first, VisitorRule::OpenAllLeft),
    (is_second, VisitorRule::OpenEvenRight),
    (is_last, VisitorRule::ToggleAllRight),
    (is_even, VisitorRule::RightOnMultiples),
    (always, VisitorRule::LeftOnMultiples),
];

impl VisitorRule {
    /// Picks the rule for `visitor_id` in a roster whose highest id is `last_id`.
    pub fn select(visitor_id: WindowId, last_id: WindowId) -> Self {
        RULE_TABLE
            .iter()
            .find(|(matches, _)| matches(visitor_id, last_id))
            .map_or(VisitorRule::LeftOnMultiples, |(_, rule)| *rule)
    }

    /// Applies the rule on behalf of `visitor_id` to each window in order.
    ///
    /// Every window passes through a status recompute, including windows the
    /// rule leaves untouched.
    pub fn apply(self, visitor_id: WindowId, windows: &mut [Window]) {
        for window in windows.iter_mut() {
            let is_multiple = visitor_id != 0 && window.id() % visitor_id == 0;
            match self {
                VisitorRule::OpenAllLeft => window.open_left(),
                VisitorRule::OpenEvenRight => {
                    if window.id() % 2 == 0 {
                        window.open_right();
                    }
                }
                VisitorRule::ToggleAllRight => window.toggle_right(),
                VisitorRule::RightOnMultiples => {
                    if is_multiple {
                        if !window.right_opened() {
                            window.open_right();
                        }
                        if window.left_opened() {
                            window.close_left();
                        }
                    }
                }
                VisitorRule::LeftOnMultiples => {
                    if is_multiple {
                        if !window.left_opened() {
                            window.open_left();
                        }
                        if window.right_opened() {
                            window.close_right();
                        }
                    }
                }
            }
            window.recompute_status();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowStatus;

    fn windows(count: WindowId) -> Vec<Window> {
        (1..=count).map(Window::new).collect()
    }

    #[test]
    fn test_rule_selection_reference_roster() {
        assert_eq!(VisitorRule::select(1, 64), VisitorRule::OpenAllLeft);
        assert_eq!(VisitorRule::select(2, 64), VisitorRule::OpenEvenRight);
        assert_eq!(VisitorRule::select(3, 64), VisitorRule::LeftOnMultiples);
        assert_eq!(VisitorRule::select(4, 64), VisitorRule::RightOnMultiples);
        assert_eq!(VisitorRule::select(63, 64), VisitorRule::LeftOnMultiples);
        assert_eq!(VisitorRule::select(64, 64), VisitorRule::ToggleAllRight);
    }

    #[test]
    fn test_rule_selection_earlier_rules_take_precedence() {
        // A single visitor is both first and last.
        assert_eq!(VisitorRule::select(1, 1), VisitorRule::OpenAllLeft);
        // Visitor 2 is also last in a two-window castle.
        assert_eq!(VisitorRule::select(2, 2), VisitorRule::OpenEvenRight);
        // An odd last visitor still toggles.
        assert_eq!(VisitorRule::select(7, 7), VisitorRule::ToggleAllRight);
    }

    #[test]
    fn test_open_all_left() {
        let mut row = vec![
            Window::with_halves(1, false, false),
            Window::with_halves(2, false, true),
        ];
        VisitorRule::OpenAllLeft.apply(1, &mut row);

        assert_eq!(row[0].status(), WindowStatus::LeftOnly);
        assert_eq!(row[1].status(), WindowStatus::Open);
    }

    #[test]
    fn test_open_even_right_skips_odd_windows() {
        let mut row: Vec<Window> = (1..=4).map(|id| Window::with_halves(id, true, false)).collect();
        VisitorRule::OpenEvenRight.apply(2, &mut row);

        let statuses: Vec<WindowStatus> = row.iter().map(Window::status).collect();
        assert_eq!(
            statuses,
            vec![
                WindowStatus::LeftOnly,
                WindowStatus::Open,
                WindowStatus::LeftOnly,
                WindowStatus::Open,
            ]
        );
    }

    #[test]
    fn test_toggle_all_right() {
        let mut row = vec![
            Window::with_halves(1, true, true),
            Window::with_halves(2, false, false),
        ];
        VisitorRule::ToggleAllRight.apply(2, &mut row);

        assert_eq!(row[0].status(), WindowStatus::LeftOnly);
        assert_eq!(row[1].status(), WindowStatus::RightOnly);
    }

    #[test]
    fn test_right_on_multiples() {
        let mut row = windows(9);
        VisitorRule::RightOnMultiples.apply(4, &mut row);

        for window in &row {
            if window.id() % 4 == 0 {
                assert_eq!(window.status(), WindowStatus::RightOnly);
            } else {
                assert_eq!(window.status(), WindowStatus::Open);
            }
        }
    }

    #[test]
    fn test_left_on_multiples() {
        let mut row: Vec<Window> = (1..=9).map(|id| Window::with_halves(id, false, true)).collect();
        VisitorRule::LeftOnMultiples.apply(3, &mut row);

        for window in &row {
            if window.id() % 3 == 0 {
                assert_eq!(window.status(), WindowStatus::LeftOnly);
            } else {
                assert_eq!(window.status(), WindowStatus::RightOnly);
            }
        }
    }

    #[test]
    fn test_visitor_uses_roster_boundary() {
        let mut row = windows(3);
        Visitor::new(3).visit(&mut row, 3);
        assert!(row.iter().all(|w| w.status() == WindowStatus::LeftOnly));

        let mut row = windows(6);
        Visitor::new(3).visit(&mut row, 6);
        assert_eq!(row[2].status(), WindowStatus::LeftOnly);
        assert_eq!(row[5].status(), WindowStatus::LeftOnly);
        assert_eq!(row[0].status(), WindowStatus::Open);
    }
}
