//! Search section widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use syllo_app::state::{format_elapsed, AppState, Focus};

use crate::theme::styles;

pub struct SearchPanel<'a> {
    state: &'a AppState,
}

impl<'a> SearchPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn title(&self) -> String {
        match self.state.search_elapsed {
            Some(elapsed) => format!(" Search — {} ", format_elapsed(elapsed)),
            None => " Search ".to_string(),
        }
    }
}

impl Widget for SearchPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Search;
        let title = self.title();
        let block = styles::section_block(&title, focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let cursor = if focused { "█" } else { "" };
        let lines = vec![
            Line::from(vec![
                Span::styled("Query: ", styles::text_secondary()),
                Span::styled(self.state.query_input.clone(), styles::text_primary()),
                Span::styled(cursor, styles::accent()),
            ]),
            Line::from(Span::styled(
                "[Enter] Search   [Tab] switch section",
                styles::text_muted(),
            )),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_rows(state: &AppState) -> Vec<String> {
        let area = Rect::new(0, 0, 50, 5);
        let mut buf = Buffer::empty(area);
        SearchPanel::new(state).render(area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_shows_query_input() {
        let mut state = AppState::new();
        state.query_input = "revenue 2023".to_string();
        let rows = render_rows(&state);
        assert!(rows.iter().any(|row| row.contains("revenue 2023")));
    }

    #[test]
    fn test_title_includes_elapsed_time() {
        let mut state = AppState::new();
        state.search_elapsed = Some(std::time::Duration::from_millis(870));
        let rows = render_rows(&state);
        assert!(rows[0].contains("0.87 s"));
    }
}
