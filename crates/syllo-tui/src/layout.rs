//! Screen layout definitions for the TUI
//!
//! A fixed header bar on top, then the body split into the action column
//! (upload + search) and the results column (answer + collapsible panels).

use ratatui::layout::{Constraint, Layout, Rect};

/// Width share of the action column, in percent
const ACTION_COLUMN_PERCENT: u16 = 36;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header bar (title + spinner + deploy indicator)
    pub header: Rect,

    /// Left column (upload section above search section)
    pub upload: Rect,
    pub search: Rect,

    /// Right column (answer + results/JSON/logs panels)
    pub results: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header (bordered)
        Constraint::Min(6),    // Body
    ])
    .split(area);

    let columns = Layout::horizontal([
        Constraint::Percentage(ACTION_COLUMN_PERCENT),
        Constraint::Min(20),
    ])
    .split(rows[1]);

    let left = Layout::vertical([
        Constraint::Length(7), // Upload section
        Constraint::Min(5),    // Search section
    ])
    .split(columns[0]);

    ScreenAreas {
        header: rows[0],
        upload: left[0],
        search: left[1],
        results: columns[1],
    }
}
