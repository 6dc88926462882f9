//! Main update function and message dispatch (TEA pattern)

use std::path::PathBuf;

use syllo_core::prelude::*;
use syllo_core::DeployStatus;

use crate::message::Message;
use crate::state::{AppState, ConfirmState, NoticeState};
use crate::state::format_elapsed;

use super::{keys, UpdateAction, UpdateResult};

/// Process a message and mutate state accordingly.
///
/// The only mutation path for [`AppState`]. Returns follow-up messages and
/// backend actions for the event loop.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => keys::handle_key(state, key),

        Message::Tick => {
            if state.is_busy() {
                state.advance_spinner();
            }
            UpdateResult::none()
        }

        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────
        // Search
        // ─────────────────────────────────────────────────────
        Message::SubmitSearch => {
            let query = state.query_input.trim().to_string();
            if query.is_empty() {
                return UpdateResult::none();
            }
            if state.search_loading {
                // A search is already in flight; the new one supersedes it
                debug!("superseding in-flight search");
            }
            state.search_loading = true;
            state.search_elapsed = None;
            let seq = state.next_search_seq();
            UpdateResult::action(UpdateAction::Search { seq, query })
        }

        Message::SearchCompleted {
            seq,
            response,
            elapsed,
        } => {
            if seq != state.search_seq {
                debug!("discarding stale search completion (seq {seq})");
                return UpdateResult::none();
            }
            state.search_loading = false;
            state.search_elapsed = Some(elapsed);
            state.response = Some(response);
            UpdateResult::none()
        }

        Message::SearchFailed { seq, error } => {
            // Diagnostic channel only; the view keeps its previous results
            error!("search failed: {error}");
            if seq == state.search_seq {
                state.search_loading = false;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────
        // Upload
        // ─────────────────────────────────────────────────────
        Message::SubmitUpload => {
            let path = state.file_input.trim().to_string();
            if path.is_empty() {
                state.notice = Some(NoticeState::new(
                    "Upload PDF",
                    "Select a PDF file before proceeding",
                ));
                return UpdateResult::none();
            }
            state.upload_loading = true;
            state.upload_elapsed = None;
            let seq = state.next_upload_seq();
            UpdateResult::action(UpdateAction::UploadPdf {
                seq,
                path: PathBuf::from(path),
            })
        }

        Message::UploadCompleted {
            seq,
            result,
            elapsed,
        } => {
            if seq != state.upload_seq {
                debug!("discarding stale upload completion (seq {seq})");
                return UpdateResult::none();
            }
            state.upload_loading = false;
            state.upload_elapsed = Some(elapsed);
            state.upload = Some(result);
            // Success clears the file-selection input
            state.file_input.clear();
            state.notice = Some(NoticeState::new(
                "Upload PDF",
                format!("Upload completed successfully in {}", format_elapsed(elapsed)),
            ));
            UpdateResult::none()
        }

        Message::UploadFailed { seq, error } => {
            error!("upload failed: {error}");
            if seq != state.upload_seq {
                debug!("discarding stale upload failure (seq {seq})");
                return UpdateResult::none();
            }
            state.upload_loading = false;
            // Previous UploadResult stays untouched
            state.notice = Some(NoticeState::error(format!(
                "Error uploading the PDF file: {error}"
            )));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────
        // Deploy
        // ─────────────────────────────────────────────────────
        Message::TriggerDeploy => {
            if state.deploy_loading {
                return UpdateResult::none();
            }
            state.deploy_loading = true;
            UpdateResult::action(UpdateAction::Deploy)
        }

        Message::DeployCompleted { success } => {
            state.deploy_loading = false;
            state.deploy_status = if success {
                DeployStatus::Success
            } else {
                DeployStatus::Error
            };
            if !success {
                state.notice = Some(NoticeState::error("Deploy failed"));
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────
        // Logs
        // ─────────────────────────────────────────────────────
        Message::LogsFetched { snapshot } => {
            // A response without a `logs` key carries nothing to replace;
            // the local buffer stays as it is.
            if let Some(logs) = snapshot.logs {
                state.logs = logs;
            }
            state.poll_error = false;
            UpdateResult::none()
        }

        Message::LogsFetchFailed { error } => {
            // Silent at the UI; the next poll retries
            debug!("log poll failed: {error}");
            state.poll_error = true;
            UpdateResult::none()
        }

        Message::RequestClearLogs => {
            state.confirm = Some(ConfirmState::clear_logs());
            UpdateResult::none()
        }

        Message::ConfirmClearLogs => {
            state.confirm = None;
            UpdateResult::action(UpdateAction::ClearLogs)
        }

        Message::CancelDialog => {
            state.confirm = None;
            UpdateResult::none()
        }

        Message::LogsCleared => {
            state.logs.clear();
            state.notice = Some(NoticeState::new("Server Logs", "All logs have been cleared."));
            UpdateResult::none()
        }

        Message::LogsClearFailed { error } => {
            error!("clear logs failed: {error}");
            // Local buffer stays unchanged
            state.notice = Some(NoticeState::error("Error clearing logs."));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────
        // UI chrome
        // ─────────────────────────────────────────────────────
        Message::TogglePanel(panel) => {
            state.panels.toggle(panel);
            UpdateResult::none()
        }

        Message::DismissNotice => {
            state.notice = None;
            UpdateResult::none()
        }
    }
}
