//! Application error types

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Backend/HTTP Errors
    // ─────────────────────────────────────────────────────────────
    /// Network-level failure (connection refused, DNS, timeout, body read).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered, but with a non-success status code.
    ///
    /// Kept distinct from [`Error::Http`] so callers can tell a rejected
    /// request apart from a network failure.
    #[error("unexpected HTTP status: {status}")]
    UnexpectedStatus { status: u16 },

    /// The backend answered 2xx but the payload did not mean success
    /// (e.g. `{"status": "error"}` from the clear-logs endpoint).
    #[error("backend error: {message}")]
    Backend { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn status(status: u16) -> Self {
        Self::UnexpectedStatus { status }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    /// Check if this error came from the network layer rather than from a
    /// backend response
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Check if this error is a non-success HTTP status
    pub fn is_status(&self) -> bool {
        matches!(self, Error::UnexpectedStatus { .. })
    }
}
