//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handling (focus, input editing, shortcuts, dialogs)

pub(crate) mod keys;
pub(crate) mod update;


use std::path::PathBuf;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Side effects the event loop should perform after update.
///
/// Handlers never talk to the backend themselves; they describe the call and
/// the runner spawns it, delivering the completion back as a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Issue a search. `seq` ties the completion back to this request.
    Search { seq: u64, query: String },

    /// Read the file at `path` and upload it for indexing.
    UploadPdf { seq: u64, path: PathBuf },

    /// Trigger the remote deploy.
    Deploy,

    /// Clear the backend logs (already confirmed).
    ClearLogs,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
