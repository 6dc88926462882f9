//! Application state (Model in TEA pattern)

use std::time::Duration;

use syllo_core::{DeployStatus, SearchResponse, UploadResult};

/// Which text input currently receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// File-path input of the upload section
    Upload,
    /// Query input of the search section
    #[default]
    Search,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Upload => Focus::Search,
            Focus::Search => Focus::Upload,
        }
    }
}

/// The three collapsible panels of the results area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Results,
    Json,
    Logs,
}

/// Expansion state of the results-area panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    pub results: bool,
    pub json: bool,
    pub logs: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        // Formatted results start expanded, matching the original layout
        Self {
            results: true,
            json: false,
            logs: false,
        }
    }
}

impl PanelState {
    pub fn toggle(&mut self, panel: Panel) {
        match panel {
            Panel::Results => self.results = !self.results,
            Panel::Json => self.json = !self.json,
            Panel::Logs => self.logs = !self.logs,
        }
    }

    pub fn is_expanded(&self, panel: Panel) -> bool {
        match panel {
            Panel::Results => self.results,
            Panel::Json => self.json,
            Panel::Logs => self.logs,
        }
    }
}

/// A blocking notice dialog (the TUI stand-in for `alert()`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeState {
    pub title: String,
    pub message: String,
}

impl NoticeState {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }
}

/// Confirmation dialog state (Enter confirms, Esc cancels)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmState {
    pub title: String,
    pub message: String,
}

impl ConfirmState {
    /// The clear-logs confirmation
    pub fn clear_logs() -> Self {
        Self {
            title: "Clear logs?".to_string(),
            message: "Are you sure you want to clear all logs?".to_string(),
        }
    }
}

/// The single mutable application state.
///
/// Mutated only by `handler::update`; rendering is a pure function of this
/// struct. Nothing here survives a process restart.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    // Inputs
    pub query_input: String,
    pub file_input: String,
    pub focus: Focus,

    // Last received payloads (each replaced wholesale, never merged)
    pub response: Option<SearchResponse>,
    pub upload: Option<UploadResult>,
    pub logs: Vec<String>,

    // Operation flags and timers
    pub search_loading: bool,
    pub upload_loading: bool,
    pub deploy_loading: bool,
    pub search_elapsed: Option<Duration>,
    pub upload_elapsed: Option<Duration>,
    pub deploy_status: DeployStatus,

    /// Last log poll failed; cleared by the next successful poll.
    pub poll_error: bool,

    // Request sequencing: completions carrying an older seq than the latest
    // issued are stale and must not clobber newer state.
    pub search_seq: u64,
    pub upload_seq: u64,

    // UI chrome
    pub panels: PanelState,
    pub notice: Option<NoticeState>,
    pub confirm: Option<ConfirmState>,
    pub spinner_frame: usize,

    should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Any backend operation in flight (drives the global spinner)
    pub fn is_busy(&self) -> bool {
        self.search_loading || self.upload_loading || self.deploy_loading
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Issue the next search sequence number and record it as the latest.
    pub fn next_search_seq(&mut self) -> u64 {
        self.search_seq += 1;
        self.search_seq
    }

    /// Issue the next upload sequence number and record it as the latest.
    pub fn next_upload_seq(&mut self) -> u64 {
        self.upload_seq += 1;
        self.upload_seq
    }

    /// Mutable reference to the input the focus points at
    pub fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            Focus::Upload => &mut self.file_input,
            Focus::Search => &mut self.query_input,
        }
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}

/// Format an elapsed duration the way the section headers show it
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2} s", elapsed.as_secs_f64())
}
