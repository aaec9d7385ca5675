//! Rendering tests for the terminal front end.
//!
//! Draws the full UI into a `TestBackend` and checks the visible text for
//! counts, validation feedback, controls and empty states.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tasklist::app::{App, PanelFocus};
use tasklist::tasks::TaskStore;
use tasklist::ui;
use tasklist_core::Filter;

/// Renders `app` and returns the screen as one string per row.
fn render(app: &App) -> Vec<String> {
    let backend = TestBackend::new(100, 20);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| ui::draw(frame, app))
        .expect("draw should succeed");

    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

fn screen_contains(screen: &[String], needle: &str) -> bool {
    screen.iter().any(|row| row.contains(needle))
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn empty_store_shows_empty_state_and_no_controls() {
    let app = App::new();
    let screen = render(&app);
    assert!(screen_contains(&screen, "To-Do List"));
    assert!(screen_contains(&screen, "0 total"));
    assert!(screen_contains(&screen, "No tasks yet. Add one above!"));
    assert!(screen_contains(&screen, "0/100 characters"));
    assert!(!screen_contains(&screen, "Filter:"));
    assert!(!screen_contains(&screen, "Quick actions:"));
}

#[test]
fn sample_tasks_render_with_stats_and_controls() {
    let app = App::with_store(TaskStore::with_sample_tasks());
    let screen = render(&app);
    assert!(screen_contains(&screen, "2 total"));
    assert!(screen_contains(&screen, "1 active"));
    assert!(screen_contains(&screen, "1 completed"));
    assert!(screen_contains(&screen, "Filter: All Tasks"));
    assert!(screen_contains(&screen, "Sort: Newest First"));
    assert!(screen_contains(&screen, "Quick actions:"));
    assert!(screen_contains(&screen, "[a] Complete All"));
    assert!(screen_contains(&screen, "[c] Clear Completed"));
    assert!(screen_contains(&screen, "[X] Clear All"));
    assert!(screen_contains(&screen, "[ ] Sample pending task"));
    assert!(screen_contains(&screen, "[\u{2713}] Sample completed task"));
}

#[test]
fn newest_first_puts_latest_on_top() {
    let app = App::with_store(TaskStore::with_sample_tasks());
    let screen = render(&app);
    let pending_row = screen
        .iter()
        .position(|r| r.contains("Sample pending task"))
        .unwrap();
    let completed_row = screen
        .iter()
        .position(|r| r.contains("Sample completed task"))
        .unwrap();
    assert!(pending_row < completed_row);
}

#[test]
fn validation_error_is_displayed_and_cleared() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);
    let screen = render(&app);
    assert!(screen_contains(&screen, "\u{2717} Task cannot be empty"));
    assert!(screen_contains(&screen, "1/100 characters"));

    press(&mut app, KeyCode::Char('a'));
    let screen = render(&app);
    assert!(!screen_contains(&screen, "Task cannot be empty"));
    assert!(screen_contains(&screen, "2/100 characters"));
}

#[test]
fn whitespace_after_empty_rejection_keeps_message() {
    let mut app = App::new();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' '));
    let screen = render(&app);
    assert!(screen_contains(&screen, "\u{2717} Task cannot be empty"));
    assert!(screen_contains(&screen, "1/100 characters"));
}

#[test]
fn filter_hiding_everything_shows_filter_empty_state() {
    let mut store = TaskStore::new().with_filter(Filter::Completed);
    store.add_task("Not done yet").unwrap();
    let app = App::with_store(store);
    let screen = render(&app);
    assert!(screen_contains(&screen, "No tasks match your current filter."));
    assert!(screen_contains(&screen, "Filter: Completed"));
    assert!(screen_contains(&screen, "Quick actions:"));
}

#[test]
fn placeholder_shown_when_input_unfocused() {
    let mut app = App::new();
    app.focus = PanelFocus::Tasks;
    let screen = render(&app);
    assert!(screen_contains(&screen, "Add a new task..."));
}

#[test]
fn status_bar_help_follows_focus() {
    let mut app = App::with_store(TaskStore::with_sample_tasks());
    let screen = render(&app);
    assert!(screen_contains(&screen, "Enter: add"));

    press(&mut app, KeyCode::Tab);
    let screen = render(&app);
    assert!(screen_contains(&screen, "Enter: toggle"));
}

#[test]
fn configured_date_format_is_used() {
    let app = App::with_store(TaskStore::with_sample_tasks()).with_date_format("%Y".to_string());
    let screen = render(&app);
    // 2024-01-02T00:00:00Z is still 2024 in every time zone.
    let row = screen
        .iter()
        .find(|r| r.contains("Sample pending task"))
        .unwrap();
    assert!(row.contains("2024"));
}
