//! Key event handling
//!
//! Dialogs capture all keys while open. Otherwise shortcuts are Ctrl-based
//! or function keys so plain characters always flow into the focused input.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, Panel};

use super::UpdateResult;

/// Handle a key press for the current UI state
pub fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    // Blocking notice: any of Enter/Esc dismisses, everything else is eaten
    if state.notice.is_some() {
        return match key {
            InputKey::Enter | InputKey::Esc => UpdateResult::message(Message::DismissNotice),
            _ => UpdateResult::none(),
        };
    }

    // Confirm dialog (clear logs): Enter confirms, Esc cancels
    if state.confirm.is_some() {
        return match key {
            InputKey::Enter => UpdateResult::message(Message::ConfirmClearLogs),
            InputKey::Esc => UpdateResult::message(Message::CancelDialog),
            _ => UpdateResult::none(),
        };
    }

    match key {
        InputKey::CharCtrl('c') | InputKey::CharCtrl('q') => {
            UpdateResult::message(Message::Quit)
        }
        InputKey::CharCtrl('d') => UpdateResult::message(Message::TriggerDeploy),
        InputKey::CharCtrl('l') => UpdateResult::message(Message::RequestClearLogs),

        InputKey::Tab | InputKey::BackTab => {
            // Only two inputs, so forward and backward are the same hop
            state.focus = state.focus.next();
            UpdateResult::none()
        }

        InputKey::Enter => match state.focus {
            Focus::Search => UpdateResult::message(Message::SubmitSearch),
            Focus::Upload => UpdateResult::message(Message::SubmitUpload),
        },

        InputKey::F(1) => UpdateResult::message(Message::TogglePanel(Panel::Results)),
        InputKey::F(2) => UpdateResult::message(Message::TogglePanel(Panel::Json)),
        InputKey::F(3) => UpdateResult::message(Message::TogglePanel(Panel::Logs)),

        InputKey::Char(c) => {
            state.focused_input_mut().push(c);
            UpdateResult::none()
        }
        InputKey::Backspace => {
            state.focused_input_mut().pop();
            UpdateResult::none()
        }

        _ => UpdateResult::none(),
    }
}
