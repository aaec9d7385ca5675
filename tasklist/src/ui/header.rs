//! Title and task counts.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::App;

/// Render the title block with total, active and completed counts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let stats = app.store.stats();
    let line = Line::from(vec![
        Span::styled(format!("{} total", stats.total), theme::normal()),
        Span::styled(" \u{2022} ", theme::dimmed()),
        Span::styled(format!("{} active", stats.active), theme::normal()),
        Span::styled(" \u{2022} ", theme::dimmed()),
        Span::styled(format!("{} completed", stats.completed), theme::normal()),
    ]);

    let block = Block::default()
        .title(Span::styled(
            "To-Do List",
            theme::panel_title(theme::HEADER_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(theme::normal());

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
