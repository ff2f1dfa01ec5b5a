//! Text and JSON rendering of windows and query results.

use castle_core::config::DisplayConfig;
use castle_core::{StatusTally, Window, WindowId};
use serde_json::json;

const LEGEND: &str = "A = open, C = closed, I = left open, D = right open";

/// Grid layout settings for the text view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    columns: usize,
    show_legend: bool,
}

impl GridView {
    pub fn new(columns: usize, show_legend: bool) -> Self {
        Self {
            columns: columns.max(1),
            show_legend,
        }
    }

    pub fn from_config(display: &DisplayConfig) -> Self {
        Self::new(display.columns, display.show_legend)
    }

    /// Renders windows as rows of ids with their status letters underneath.
    pub fn render_grid(&self, windows: &[Window]) -> String {
        let width = windows
            .iter()
            .map(|window| window.id().to_string().len())
            .max()
            .unwrap_or(1)
            + 2;

        let mut lines = Vec::new();
        for row in windows.chunks(self.columns) {
            let ids: String = row
                .iter()
                .map(|window| format!("{:>width$}", window.id()))
                .collect();
            let symbols: String = row
                .iter()
                .map(|window| format!("{:>width$}", window.status().symbol()))
                .collect();
            lines.push(ids);
            lines.push(symbols);
        }

        if self.show_legend {
            lines.push(String::new());
            lines.push(LEGEND.to_string());
        }

        lines.join("\n")
    }
}

pub fn render_status(tally: &StatusTally) -> String {
    format!("Status\n{tally}")
}

/// Comma-separated winner ids, or `No winners`.
pub fn render_winners(winners: &[WindowId]) -> String {
    let message = winners
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    if message.is_empty() {
        "Winners\nNo winners".to_string()
    } else {
        format!("Winners\n{message}")
    }
}

pub fn windows_json(windows: &[Window]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&json!({ "windows": windows }))
}

pub fn status_json(tally: &StatusTally) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&json!({ "status": tally, "total": tally.total() }))
}

pub fn winners_json(winners: &[WindowId]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&json!({ "winners": winners }))
}
