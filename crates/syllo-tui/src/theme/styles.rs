//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use syllo_core::DeployStatus;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn timer() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Style for the deploy indicator dot
pub fn deploy_indicator(status: &DeployStatus) -> Style {
    match status {
        DeployStatus::Unset => Style::default().fg(palette::TEXT_MUTED),
        DeployStatus::Success => Style::default().fg(palette::STATUS_GREEN),
        DeployStatus::Error => Style::default().fg(palette::STATUS_RED),
    }
}

/// Bordered section block; the active section gets a highlighted border
pub fn section_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(palette::BORDER_ACTIVE)
    } else {
        Style::default().fg(palette::BORDER_DIM)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(title.to_string())
}
