//! Server log tail panel
//!
//! Shows the latest snapshot from the log poller. Only the tail that fits
//! the panel is drawn; the buffer itself is replaced wholesale on each poll.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

use super::panel_title;

pub struct LogsPanel<'a> {
    logs: &'a [String],
    poll_error: bool,
    expanded: bool,
}

impl<'a> LogsPanel<'a> {
    pub fn new(logs: &'a [String], poll_error: bool, expanded: bool) -> Self {
        Self {
            logs,
            poll_error,
            expanded,
        }
    }
}

impl Widget for LogsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut title = panel_title("Server Logs", "F3", self.expanded);
        title.push_str("— [Ctrl+L] clear ");
        if self.poll_error {
            title.push_str("(poll failed) ");
        }
        let block = styles::section_block(&title, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if !self.expanded || inner.height == 0 {
            return;
        }

        // Tail: keep only the lines that fit
        let visible = inner.height as usize;
        let skip = self.logs.len().saturating_sub(visible);
        let lines: Vec<Line> = self.logs[skip..]
            .iter()
            .map(|line| {
                Line::from(Span::styled(
                    line.trim_end().to_string(),
                    ratatui::style::Style::default().fg(palette::TEXT_SECONDARY),
                ))
            })
            .collect();

        if lines.is_empty() {
            Paragraph::new(Line::from(Span::styled("(no logs)", styles::text_muted())))
                .render(inner, buf);
        } else {
            Paragraph::new(lines).render(inner, buf);
        }
    }
}
