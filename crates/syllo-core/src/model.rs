//! Backend payload types
//!
//! These mirror the wire shapes of the search backend exactly. Every type is
//! replaced wholesale when a new response arrives; nothing is merged.

use serde::{Deserialize, Serialize};

/// One ranked hit from the search backend.
///
/// `image` carries an optional base64-encoded JPEG thumbnail of the matching
/// page. It is kept as the raw encoded string; decoding happens only where a
/// size indication is needed (see [`SearchResult::preview_len`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub page: u32,
    /// Relevance score. Observed in 0..1 but the backend does not bound it.
    pub score: f64,
    /// Link to the source document.
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl SearchResult {
    /// Decoded byte length of the preview thumbnail, if one is attached.
    ///
    /// Returns `None` when there is no image or the payload is not valid
    /// base64 (a malformed preview is treated the same as no preview).
    pub fn preview_len(&self) -> Option<usize> {
        use base64::Engine;
        let encoded = self.image.as_deref()?;
        base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .ok()
            .map(|bytes| bytes.len())
    }
}

/// A full response to one query: ranked results plus an optional
/// synthesized answer from the backend's LLM pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub llama_response: Option<String>,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// Location of a stored PDF, returned by the upload endpoint.
///
/// Only one is live at a time; a new upload fully supersedes the prior one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub url: String,
}

/// Full snapshot of the backend's diagnostic log tail.
///
/// Each poll replaces the previous snapshot entirely; the endpoint is not
/// incremental. `logs` is `None` when the response carried no `logs` key at
/// all, which consumers treat as "nothing to replace" rather than "empty".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogSnapshot {
    #[serde(default)]
    pub logs: Option<Vec<String>>,
}

impl LogSnapshot {
    pub fn of(lines: Vec<String>) -> Self {
        Self { logs: Some(lines) }
    }

    pub fn lines(&self) -> &[String] {
        self.logs.as_deref().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

/// Tri-state deploy indicator.
///
/// Purely visual; it never gates other operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeployStatus {
    /// No deploy attempted yet this session.
    #[default]
    Unset,
    Success,
    Error,
}

impl DeployStatus {
    /// Short label for the header indicator.
    pub fn label(&self) -> &'static str {
        match self {
            DeployStatus::Unset => "○",
            DeployStatus::Success => "●",
            DeployStatus::Error => "●",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "llama_response": "The revenue grew in Q1.",
            "results": [
                {"title": "Q1", "page": 4, "score": 0.87, "url": "http://x/doc.pdf", "image": null}
            ]
        }"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.llama_response.as_deref(), Some("The revenue grew in Q1."));
        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].title, "Q1");
        assert_eq!(resp.results[0].page, 4);
        assert!((resp.results[0].score - 0.87).abs() < f64::EPSILON);
        assert!(resp.results[0].image.is_none());
    }

    #[test]
    fn test_parse_search_response_without_llama_field() {
        let json = r#"{"results": []}"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(resp.llama_response.is_none());
        assert!(resp.results.is_empty());
    }

    #[test]
    fn test_parse_upload_result() {
        let res: UploadResult = serde_json::from_str(r#"{"url": "http://x/stored.pdf"}"#).unwrap();
        assert_eq!(res.url, "http://x/stored.pdf");
    }

    #[test]
    fn test_parse_log_snapshot() {
        let snap: LogSnapshot = serde_json::from_str(r#"{"logs": ["a\n", "b\n"]}"#).unwrap();
        assert_eq!(snap.lines().len(), 2);

        // An explicitly empty list is distinct from a missing key
        let snap: LogSnapshot = serde_json::from_str(r#"{"logs": []}"#).unwrap();
        assert_eq!(snap.logs, Some(vec![]));
        assert!(snap.is_empty());

        // Missing `logs` key parses as "no payload", not as an empty list
        let snap: LogSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snap.logs.is_none());
        assert!(snap.is_empty());
    }

    #[test]
    fn test_preview_len_decodes_base64() {
        let payload = base64::engine::general_purpose::STANDARD.encode([0u8; 128]);
        let result = SearchResult {
            title: "Q1".into(),
            page: 1,
            score: 0.5,
            url: "http://x".into(),
            image: Some(payload),
        };
        assert_eq!(result.preview_len(), Some(128));
    }

    #[test]
    fn test_preview_len_none_without_image() {
        let result = SearchResult {
            title: "Q1".into(),
            page: 1,
            score: 0.5,
            url: "http://x".into(),
            image: None,
        };
        assert_eq!(result.preview_len(), None);
    }

    #[test]
    fn test_preview_len_none_for_invalid_base64() {
        let result = SearchResult {
            title: "Q1".into(),
            page: 1,
            score: 0.5,
            url: "http://x".into(),
            image: Some("%%not-base64%%".into()),
        };
        assert_eq!(result.preview_len(), None);
    }

    #[test]
    fn test_deploy_status_default_is_unset() {
        assert_eq!(DeployStatus::default(), DeployStatus::Unset);
    }
}
