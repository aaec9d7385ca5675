//! Filter/sort controls, quick actions and the projected task list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the controls, the quick actions and the task list below them.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(2)])
        .split(area);

    render_controls(frame, chunks[0], app);
    render_tasks(frame, chunks[1], app);
}

/// Render the current filter and sort labels and the bulk-action keys.
/// Hidden while the store is empty.
fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    if app.store.is_empty() {
        return;
    }

    let view_line = Line::from(vec![
        Span::styled("Filter: ", theme::dimmed()),
        Span::styled(app.store.filter().label(), theme::bold()),
        Span::raw("   "),
        Span::styled("Sort: ", theme::dimmed()),
        Span::styled(app.store.sort_by().label(), theme::bold()),
    ]);

    let actions_line = Line::from(vec![
        Span::styled("Quick actions: ", theme::dimmed()),
        Span::styled("[a]", theme::bold()),
        Span::raw(" Complete All  "),
        Span::styled("[c]", theme::bold()),
        Span::raw(" Clear Completed  "),
        Span::styled("[X]", theme::bold()),
        Span::raw(" Clear All"),
    ]);

    frame.render_widget(Paragraph::new(vec![view_line, actions_line]), area);
}

/// Render the filtered, sorted tasks or an empty-state message.
fn render_tasks(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Tasks;
    let view = app.store.project();

    let block = Block::default()
        .title(Span::styled(
            "Tasks",
            theme::panel_title(theme::TASKS_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    if view.is_empty() {
        let message = if app.store.is_empty() {
            "No tasks yet. Add one above!"
        } else {
            "No tasks match your current filter."
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(message, theme::dimmed())))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = view
        .tasks
        .iter()
        .map(|task| {
            let (checkbox, checkbox_style, text_style) = if task.completed {
                ("[\u{2713}]", theme::normal().fg(theme::SUCCESS), theme::completed())
            } else {
                ("[ ]", theme::normal(), theme::normal())
            };

            let line = Line::from(vec![
                Span::styled(checkbox, checkbox_style),
                Span::raw(" "),
                Span::styled(task.text.as_str(), text_style),
                Span::raw("  "),
                Span::styled(app.format_date(task.created_at), theme::dimmed()),
            ]);

            ListItem::new(line)
        })
        .collect();

    let mut list = List::new(items).block(block);
    if is_focused {
        list = list.highlight_style(theme::selected());
    }

    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}
