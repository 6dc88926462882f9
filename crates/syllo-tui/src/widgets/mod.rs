//! Custom widget components

mod dialogs;
mod header;
mod json_panel;
mod logs_panel;
pub mod modal_overlay;
mod results_panel;
mod search_panel;
mod upload_panel;

pub use dialogs::{ConfirmDialog, NoticeDialog};
pub use header::MainHeader;
pub use json_panel::JsonPanel;
pub use logs_panel::LogsPanel;
pub use results_panel::{card_lines, ResultsPanel};
pub use search_panel::SearchPanel;
pub use upload_panel::UploadPanel;

/// Title for a collapsible panel: expansion marker plus toggle hint
pub(crate) fn panel_title(name: &str, key_hint: &str, expanded: bool) -> String {
    let marker = if expanded { "▾" } else { "▸" };
    format!(" {marker} {name} [{key_hint}] ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_title_marker() {
        assert_eq!(
            panel_title("JSON Results", "F2", true),
            " ▾ JSON Results [F2] "
        );
        assert_eq!(
            panel_title("JSON Results", "F2", false),
            " ▸ JSON Results [F2] "
        );
    }
}
