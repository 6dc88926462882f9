//! JSON redaction for the raw-payload view
//!
//! Preview thumbnails are large base64 blobs; showing them verbatim would
//! make the JSON panel unreadable. Rendering replaces each one with a fixed
//! placeholder token instead.

use serde_json::Value;

use crate::error::Result;
use crate::model::SearchResponse;

/// Token substituted for every non-null `image` field in the JSON view.
pub const IMAGE_PLACEHOLDER: &str = "[BASE64_IMAGE_DATA]";

/// Return a copy of `value` with every `results[*].image` payload replaced
/// by [`IMAGE_PLACEHOLDER`]. Null images stay null. The input is not mutated,
/// so redacting the same value twice yields identical output.
pub fn redact_images(value: &Value) -> Value {
    let mut redacted = value.clone();
    if let Some(results) = redacted.get_mut("results").and_then(Value::as_array_mut) {
        for result in results {
            if let Some(image) = result.get_mut("image") {
                if !image.is_null() {
                    *image = Value::String(IMAGE_PLACEHOLDER.to_string());
                }
            }
        }
    }
    redacted
}

/// Pretty-print a response for the JSON panel, with image payloads elided.
pub fn to_display_json(response: &SearchResponse) -> Result<String> {
    let value = serde_json::to_value(response)?;
    Ok(serde_json::to_string_pretty(&redact_images(&value))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchResult;

    fn response_with_image() -> SearchResponse {
        SearchResponse {
            llama_response: Some("answer".into()),
            results: vec![
                SearchResult {
                    title: "Q1".into(),
                    page: 4,
                    score: 0.87,
                    url: "http://x/doc.pdf".into(),
                    image: Some("aGVsbG8=".into()),
                },
                SearchResult {
                    title: "Q2".into(),
                    page: 7,
                    score: 0.55,
                    url: "http://x/doc.pdf".into(),
                    image: None,
                },
            ],
        }
    }

    #[test]
    fn test_redact_replaces_image_with_placeholder() {
        let text = to_display_json(&response_with_image()).unwrap();
        assert!(text.contains(IMAGE_PLACEHOLDER));
        assert!(!text.contains("aGVsbG8="));
    }

    #[test]
    fn test_redact_keeps_null_image_null() {
        let value = serde_json::to_value(response_with_image()).unwrap();
        let redacted = redact_images(&value);
        assert!(redacted["results"][1]["image"].is_null());
    }

    #[test]
    fn test_redact_is_idempotent() {
        let resp = response_with_image();
        let first = to_display_json(&resp).unwrap();
        let second = to_display_json(&resp).unwrap();
        assert_eq!(first, second);

        // Redacting already-redacted JSON changes nothing further
        let value = serde_json::to_value(&resp).unwrap();
        let once = redact_images(&value);
        let twice = redact_images(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_redact_without_results_key_is_noop() {
        let value = serde_json::json!({"llama_response": "hi"});
        assert_eq!(redact_images(&value), value);
    }

    #[test]
    fn test_display_json_preserves_other_fields() {
        let text = to_display_json(&response_with_image()).unwrap();
        assert!(text.contains("\"llama_response\": \"answer\""));
        assert!(text.contains("\"page\": 4"));
        assert!(text.contains("\"score\": 0.87"));
    }
}
