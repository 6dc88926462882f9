//! syllo-app - Application state and orchestration for Syllo Console
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a single [`AppState`] mutated only by [`handler::update`],
//! driven by [`Message`]s from the terminal, the log poller, and completed
//! backend calls. Side effects are requested via [`UpdateAction`] and carried
//! out by the runner in `syllo-tui`.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, ConfirmState, Focus, NoticeState, Panel, PanelState};
