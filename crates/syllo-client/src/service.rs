//! The `SearchService` trait - seam between the UI and the backend

use async_trait::async_trait;

use syllo_core::{LogSnapshot, Result, SearchResponse, UploadResult};

/// Outbound operations against the search backend.
///
/// Each method is a single request/response round trip with no internal
/// retry. Latency measurement belongs to the caller.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Issue a text query. Fails on network failure or a non-JSON response.
    async fn search(&self, query: &str) -> Result<SearchResponse>;

    /// Upload a PDF for indexing as multipart form data (field `file`).
    ///
    /// A non-success HTTP status yields [`syllo_core::Error::UnexpectedStatus`],
    /// distinct from a network-level failure.
    async fn upload_pdf(&self, bytes: Vec<u8>, filename: &str) -> Result<UploadResult>;

    /// Trigger a remote deploy. Authenticated; any non-200 is an error.
    async fn deploy(&self) -> Result<()>;

    /// Fetch the current full log snapshot. Authenticated.
    async fn fetch_logs(&self) -> Result<LogSnapshot>;

    /// Clear the backend logs. Authenticated; a 2xx response whose body does
    /// not report `"status": "success"` is still an error.
    async fn clear_logs(&self) -> Result<()>;
}
