//! # syllo-core - Core Domain Types
//!
//! Foundation crate for Syllo Console. Provides the backend payload types,
//! error handling, JSON redaction for the raw-payload view, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, base64, reqwest for error conversion).
//!
//! ## Public API
//!
//! ### Domain Types (`model`)
//! - [`SearchResult`] - One ranked hit: title, page, score, URL, optional preview
//! - [`SearchResponse`] - A full query response (results + optional summary)
//! - [`UploadResult`] - Location of an uploaded PDF
//! - [`LogSnapshot`] - Full replacement snapshot of the backend log tail
//! - [`DeployStatus`] - Tri-state deploy indicator
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum distinguishing transport failures from
//!   non-success HTTP statuses and malformed payloads
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ### Redaction (`redact`)
//! - [`redact::redact_images`] - Replace base64 image payloads with a placeholder
//! - [`redact::to_display_json`] - Pretty-print a response for the JSON panel
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use syllo_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod model;
pub mod redact;

/// Prelude for common imports used throughout all Syllo Console crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use model::{DeployStatus, LogSnapshot, SearchResponse, SearchResult, UploadResult};
pub use redact::{redact_images, to_display_json, IMAGE_PLACEHOLDER};
