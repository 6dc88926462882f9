//! Message types for the application (TEA pattern)

use std::time::Duration;

use syllo_core::{LogSnapshot, SearchResponse, UploadResult};

use crate::input_key::InputKey;
use crate::state::Panel;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit the application (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // User Intents
    // ─────────────────────────────────────────────────────────
    /// Run a search with the current query input
    SubmitSearch,
    /// Upload the PDF named by the current file-path input
    SubmitUpload,
    /// Trigger a remote deploy
    TriggerDeploy,
    /// Ask for confirmation before clearing the backend logs
    RequestClearLogs,
    /// Confirmed: clear the backend logs
    ConfirmClearLogs,
    /// Dismiss the confirm dialog without acting
    CancelDialog,
    /// Dismiss the current notice dialog
    DismissNotice,
    /// Expand/collapse a results-area panel
    TogglePanel(Panel),

    // ─────────────────────────────────────────────────────────
    // Backend Completions
    // ─────────────────────────────────────────────────────────
    /// Search finished. `seq` is the request sequence captured at start;
    /// stale completions (seq older than the latest issued) are discarded.
    SearchCompleted {
        seq: u64,
        response: SearchResponse,
        elapsed: Duration,
    },
    /// Search failed (diagnostic log only, view keeps its previous state)
    SearchFailed { seq: u64, error: String },

    /// Upload finished
    UploadCompleted {
        seq: u64,
        result: UploadResult,
        elapsed: Duration,
    },
    /// Upload failed (blocking notice)
    UploadFailed { seq: u64, error: String },

    /// Deploy finished, either way
    DeployCompleted { success: bool },

    // ─────────────────────────────────────────────────────────
    // Log Poller
    // ─────────────────────────────────────────────────────────
    /// A poll succeeded; a snapshot with a payload replaces the local buffer
    LogsFetched { snapshot: LogSnapshot },
    /// A poll failed; silent except for an internal flag (next poll retries)
    LogsFetchFailed { error: String },

    /// Backend logs were cleared
    LogsCleared,
    /// Clearing failed; local buffer is left unchanged
    LogsClearFailed { error: String },
}
