//! Notice and confirm dialogs
//!
//! The TUI stand-ins for the browser's `alert()` and `confirm()`: both are
//! blocking overlays that capture all keys until dismissed.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use syllo_app::state::{ConfirmState, NoticeState};

use crate::theme::{palette, styles};

use super::modal_overlay::centered_rect;

const DIALOG_WIDTH: u16 = 52;
const DIALOG_HEIGHT: u16 = 7;

fn dialog_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::BORDER_ACTIVE))
        .style(Style::default().bg(palette::POPUP_BG))
        .title(format!(" {title} "))
}

fn render_dialog(area: Rect, buf: &mut Buffer, title: &str, message: &str, hint: &str) {
    let rect = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    Clear.render(rect, buf);

    let block = dialog_block(title);
    let inner = block.inner(rect);
    block.render(rect, buf);

    if inner.height == 0 {
        return;
    }

    Paragraph::new(message.to_string())
        .style(styles::text_primary())
        .wrap(Wrap { trim: true })
        .render(inner, buf);

    // Hint pinned to the bottom inner row
    let hint_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    Paragraph::new(Line::from(Span::styled(hint, styles::text_muted())))
        .alignment(Alignment::Center)
        .render(hint_area, buf);
}

/// Blocking notice (single OK action)
pub struct NoticeDialog<'a> {
    state: &'a NoticeState,
}

impl<'a> NoticeDialog<'a> {
    pub fn new(state: &'a NoticeState) -> Self {
        Self { state }
    }
}

impl Widget for NoticeDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_dialog(area, buf, &self.state.title, &self.state.message, "[Enter] OK");
    }
}

/// Confirmation dialog (Enter confirms, Esc cancels)
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmState) -> Self {
        Self { state }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_dialog(
            area,
            buf,
            &self.state.title,
            &self.state.message,
            "[Enter] Confirm   [Esc] Cancel",
        );
    }
}
