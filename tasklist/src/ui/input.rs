//! New-task input box, validation message and character counter.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tasklist_core::MAX_TASK_TEXT_LENGTH;

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the input box.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Input;
    let has_error = app.store.validation_error().is_some();

    // Build the input text with cursor
    let mut display_text = app.store.pending_input().to_string();
    if is_focused {
        let byte_index = display_text
            .char_indices()
            .nth(app.cursor_position)
            .map_or(display_text.len(), |(i, _)| i);
        display_text.insert(byte_index, '\u{2588}');
    }

    let input_line = if app.store.pending_input().is_empty() && !is_focused {
        Line::from(Span::styled("Add a new task...", theme::dimmed()))
    } else {
        Line::from(Span::styled(display_text, theme::normal()))
    };

    let border_style = if has_error {
        theme::error()
    } else if is_focused {
        theme::highlighted()
    } else {
        theme::normal()
    };

    let block = Block::default()
        .title("New Task")
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(input_line).block(block);

    frame.render_widget(paragraph, area);
}

/// Render the validation message (if any) and the character counter.
pub fn render_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let error_line = app.store.validation_error().map_or_else(Line::default, |err| {
        Line::from(vec![
            Span::styled("\u{2717} ", theme::error()),
            Span::styled(err.to_string(), theme::error()),
        ])
    });

    let count = app.store.pending_input().chars().count();
    let counter_line = Line::from(Span::styled(
        format!("{count}/{MAX_TASK_TEXT_LENGTH} characters"),
        theme::dimmed(),
    ));

    frame.render_widget(Paragraph::new(vec![error_line, counter_line]), area);
}
