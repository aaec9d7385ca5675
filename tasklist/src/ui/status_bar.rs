//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = match app.focus {
        PanelFocus::Input => "Enter: add | Tab: task list | Esc: quit | \u{2190}\u{2192}: move cursor",
        PanelFocus::Tasks if app.store.is_empty() => "Tab: input | Esc: quit",
        PanelFocus::Tasks => {
            "\u{2191}\u{2193}/jk: select | Enter: toggle | d: delete | f: filter | s: sort | \
             a: complete all | c: clear completed | X: clear all | Tab: input | Esc: quit"
        }
    };

    let status_line = Line::from(vec![
        Span::styled(
            concat!("Tasklist v", env!("CARGO_PKG_VERSION")),
            theme::bold(),
        ),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
