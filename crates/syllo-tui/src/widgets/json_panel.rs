//! Raw JSON panel
//!
//! Shows the last response exactly as received, except that image payloads
//! are elided to a placeholder token to keep the view compact.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use syllo_core::{to_display_json, SearchResponse};

use crate::theme::styles;

use super::panel_title;

pub struct JsonPanel<'a> {
    response: Option<&'a SearchResponse>,
    expanded: bool,
}

impl<'a> JsonPanel<'a> {
    pub fn new(response: Option<&'a SearchResponse>, expanded: bool) -> Self {
        Self { response, expanded }
    }
}

impl Widget for JsonPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = panel_title("JSON Results", "F2", self.expanded);
        let block = styles::section_block(&title, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if !self.expanded || inner.height == 0 {
            return;
        }

        let lines: Vec<Line> = match self.response.map(to_display_json) {
            Some(Ok(text)) => text
                .lines()
                .map(|line| Line::from(Span::styled(line.to_string(), styles::text_primary())))
                .collect(),
            Some(Err(_)) | None => vec![Line::from(Span::styled(
                "No results to display",
                styles::text_muted(),
            ))],
        };

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllo_core::{SearchResult, IMAGE_PLACEHOLDER};

    fn response() -> SearchResponse {
        SearchResponse {
            llama_response: Some("answer".to_string()),
            results: vec![SearchResult {
                title: "Q1".to_string(),
                page: 4,
                score: 0.87,
                url: "http://x/doc.pdf".to_string(),
                image: Some("aGVsbG8=".to_string()),
            }],
        }
    }

    fn render_text(resp: Option<&SearchResponse>, expanded: bool) -> String {
        let area = Rect::new(0, 0, 70, 24);
        let mut buf = Buffer::empty(area);
        JsonPanel::new(resp, expanded).render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_image_payload_is_elided() {
        let resp = response();
        let text = render_text(Some(&resp), true);
        assert!(text.contains(IMAGE_PLACEHOLDER));
        assert!(!text.contains("aGVsbG8="));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let resp = response();
        assert_eq!(render_text(Some(&resp), true), render_text(Some(&resp), true));
    }

    #[test]
    fn test_no_response_shows_placeholder() {
        let text = render_text(None, true);
        assert!(text.contains("No results to display"));
    }

    #[test]
    fn test_collapsed_renders_title_only() {
        let resp = response();
        let text = render_text(Some(&resp), false);
        assert!(text.contains("▸ JSON Results"));
        assert!(!text.contains("llama_response"));
    }
}
