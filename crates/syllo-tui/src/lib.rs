//! syllo-tui - Terminal UI for Syllo Console
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! screen layout, widget rendering, the log poller, and the main event loop
//! that drives `syllo-app`'s update function.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::{run, spawn_log_poller};
