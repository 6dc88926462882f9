//! Header bar widget
//!
//! App title on the left, global busy spinner next to it, deploy control
//! (key hint + tri-state indicator + spinner) on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use syllo_app::state::AppState;

use crate::theme::{palette, spinner_frame, styles};

pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette::BORDER_DIM));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Left: title + global busy spinner
        let mut left = vec![Span::styled(" Syllo Console ", styles::accent_bold())];
        if self.state.is_busy() {
            left.push(Span::styled(
                spinner_frame(self.state.spinner_frame),
                styles::accent(),
            ));
        }
        Paragraph::new(Line::from(left)).render(inner, buf);

        // Right: deploy control
        let mut right = vec![
            Span::styled("Deploy on Vespa ", styles::text_secondary()),
            Span::styled("[Ctrl+D] ", styles::text_muted()),
            Span::styled(
                self.state.deploy_status.label(),
                styles::deploy_indicator(&self.state.deploy_status),
            ),
        ];
        if self.state.deploy_loading {
            right.push(Span::raw(" "));
            right.push(Span::styled(
                spinner_frame(self.state.spinner_frame),
                styles::accent(),
            ));
        }
        right.push(Span::raw(" "));
        Paragraph::new(Line::from(right))
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}
