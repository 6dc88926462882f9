//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use ratatui::Frame;

use syllo_app::state::{AppState, Panel};

use crate::theme::{palette, styles};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: state is only read, never mutated.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    draw(frame.buffer_mut(), area, state);
}

/// Buffer-level draw, shared by `view` and the render tests
pub fn draw(buf: &mut ratatui::buffer::Buffer, area: Rect, state: &AppState) {
    // Fill entire terminal with the background color
    Block::default()
        .style(Style::default().bg(palette::DEEPEST_BG))
        .render(area, buf);

    let areas = layout::create(area);

    widgets::MainHeader::new(state).render(areas.header, buf);
    widgets::UploadPanel::new(state).render(areas.upload, buf);
    widgets::SearchPanel::new(state).render(areas.search, buf);

    render_results_column(buf, areas.results, state);

    // Dialogs draw last, over everything else
    if let Some(confirm) = &state.confirm {
        widgets::ConfirmDialog::new(confirm).render(area, buf);
    }
    if let Some(notice) = &state.notice {
        widgets::NoticeDialog::new(notice).render(area, buf);
    }
}

/// Right column: optional synthesized answer plus the three collapsible panels
fn render_results_column(buf: &mut ratatui::buffer::Buffer, area: Rect, state: &AppState) {
    let llama = state
        .response
        .as_ref()
        .and_then(|r| r.llama_response.as_deref());

    let mut constraints = Vec::with_capacity(4);
    if llama.is_some() {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(panel_constraint(state, Panel::Results));
    constraints.push(panel_constraint(state, Panel::Json));
    constraints.push(panel_constraint(state, Panel::Logs));

    let chunks = Layout::vertical(constraints).split(area);
    let mut next = 0;

    if let Some(answer) = llama {
        let block = styles::section_block(" LLama Response ", false);
        let inner = block.inner(chunks[next]);
        block.render(chunks[next], buf);
        Paragraph::new(Line::from(Span::styled(
            answer.to_string(),
            styles::text_primary(),
        )))
        .wrap(Wrap { trim: true })
        .render(inner, buf);
        next += 1;
    }

    widgets::ResultsPanel::new(state.response.as_ref(), state.panels.results)
        .render(chunks[next], buf);
    widgets::JsonPanel::new(state.response.as_ref(), state.panels.json)
        .render(chunks[next + 1], buf);
    widgets::LogsPanel::new(&state.logs, state.poll_error, state.panels.logs)
        .render(chunks[next + 2], buf);
}

/// Expanded panels share the leftover space; collapsed ones keep a title row
fn panel_constraint(state: &AppState, panel: Panel) -> Constraint {
    if state.panels.is_expanded(panel) {
        Constraint::Min(5)
    } else {
        Constraint::Length(3)
    }
}
