//! Upload section widget
//!
//! File-path input, index action hint, elapsed time of the last upload, and
//! the link to the stored PDF once one exists.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use syllo_app::state::{format_elapsed, AppState, Focus};

use crate::theme::styles;

pub struct UploadPanel<'a> {
    state: &'a AppState,
}

impl<'a> UploadPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn title(&self) -> String {
        match self.state.upload_elapsed {
            Some(elapsed) => format!(" Upload PDF — {} ", format_elapsed(elapsed)),
            None => " Upload PDF ".to_string(),
        }
    }
}

impl Widget for UploadPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Upload;
        let title = self.title();
        let block = styles::section_block(&title, focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let cursor = if focused { "█" } else { "" };
        let mut lines = vec![
            Line::from(vec![
                Span::styled("File: ", styles::text_secondary()),
                Span::styled(self.state.file_input.clone(), styles::text_primary()),
                Span::styled(cursor, styles::accent()),
            ]),
            Line::from(Span::styled("[Enter] Index", styles::text_muted())),
        ];
        if let Some(upload) = &self.state.upload {
            lines.push(Line::from(vec![
                Span::styled("PDF uploaded: ", styles::text_secondary()),
                Span::styled(upload.url.clone(), styles::accent()),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
