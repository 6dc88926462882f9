//! syllo-client - Remote service client for the Syllo search backend
//!
//! Wraps the five outbound backend calls (search, upload, deploy, log fetch,
//! log clear) behind the [`SearchService`] trait so the UI and tests never
//! touch the HTTP layer directly. [`HttpService`] is the reqwest-backed
//! implementation; `MockSearchService` is available to tests via the `mocks`
//! feature.
//!
//! None of the operations retry: the domain accepts best-effort semantics and
//! every failure is reported to the caller for synchronous handling.

pub mod http;
pub mod service;

pub use http::HttpService;
pub use service::SearchService;

#[cfg(any(test, feature = "mocks"))]
pub use service::MockSearchService;
