//! Formatted results panel
//!
//! Renders each hit as a card: title, page number, relevance score to two
//! decimals, source link, and a preview indicator when a thumbnail payload is
//! attached. The terminal cannot inline a JPEG, so the indicator reports the
//! decoded size instead.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use syllo_core::{SearchResponse, SearchResult};

use crate::theme::styles;

use super::panel_title;

/// Lines for one result card
pub fn card_lines(result: &SearchResult) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(result.title.clone(), styles::accent_bold())),
        Line::from(format!("Pagina: {}", result.page)),
        Line::from(format!("Rilevanza: {:.2}", result.score)),
        Line::from(Span::styled(result.url.clone(), styles::text_secondary())),
    ];
    if let Some(len) = result.preview_len() {
        lines.push(Line::from(Span::styled(
            format!("[preview: {:.1} KiB JPEG]", len as f64 / 1024.0),
            styles::text_muted(),
        )));
    }
    lines.push(Line::default());
    lines
}

pub struct ResultsPanel<'a> {
    response: Option<&'a SearchResponse>,
    expanded: bool,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(response: Option<&'a SearchResponse>, expanded: bool) -> Self {
        Self { response, expanded }
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = panel_title("Formatted Results", "F1", self.expanded);
        let block = styles::section_block(&title, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if !self.expanded || inner.height == 0 {
            return;
        }

        let lines = match self.response {
            Some(response) if !response.results.is_empty() => response
                .results
                .iter()
                .flat_map(card_lines)
                .collect::<Vec<_>>(),
            _ => vec![Line::from(Span::styled(
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
    use base64::Engine as _;

    fn result(image: Option<String>) -> SearchResult {
        SearchResult {
            title: "Q1".to_string(),
            page: 4,
            score: 0.87,
            url: "http://x/doc.pdf".to_string(),
            image,
        }
    }

    fn response(results: Vec<SearchResult>) -> SearchResponse {
        SearchResponse {
            llama_response: None,
            results,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn render_rows(resp: Option<&SearchResponse>, expanded: bool) -> Vec<String> {
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        ResultsPanel::new(resp, expanded).render(area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_card_formats_score_to_two_decimals() {
        let lines = card_lines(&result(None));
        let rendered: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(rendered[1], "Pagina: 4");
        assert_eq!(rendered[2], "Rilevanza: 0.87");
    }

    #[test]
    fn test_card_rounds_long_scores() {
        let mut res = result(None);
        res.score = 0.8749;
        let lines = card_lines(&res);
        assert_eq!(line_text(&lines[2]), "Rilevanza: 0.87");

        res.score = 1.0;
        let lines = card_lines(&res);
        assert_eq!(line_text(&lines[2]), "Rilevanza: 1.00");
    }

    #[test]
    fn test_card_without_image_has_no_preview_line() {
        let lines = card_lines(&result(None));
        assert!(!lines.iter().any(|l| line_text(l).contains("preview")));
    }

    #[test]
    fn test_card_with_image_shows_preview_size() {
        let payload = base64::engine::general_purpose::STANDARD.encode(vec![0u8; 2048]);
        let lines = card_lines(&result(Some(payload)));
        assert!(lines
            .iter()
            .any(|l| line_text(l).contains("[preview: 2.0 KiB JPEG]")));
    }

    #[test]
    fn test_one_card_per_result() {
        let resp = response(vec![result(None), result(None), result(None)]);
        let rows = render_rows(Some(&resp), true);
        let card_count = rows.iter().filter(|row| row.contains("Rilevanza:")).count();
        assert_eq!(card_count, resp.results.len());
    }

    #[test]
    fn test_empty_results_show_placeholder() {
        let resp = response(vec![]);
        let rows = render_rows(Some(&resp), true);
        assert!(rows.iter().any(|row| row.contains("No results to display")));

        let rows = render_rows(None, true);
        assert!(rows.iter().any(|row| row.contains("No results to display")));
    }

    #[test]
    fn test_collapsed_panel_renders_no_cards() {
        let resp = response(vec![result(None)]);
        let rows = render_rows(Some(&resp), false);
        assert!(!rows.iter().any(|row| row.contains("Rilevanza:")));
        assert!(rows[0].contains("▸ Formatted Results"));
    }
}
