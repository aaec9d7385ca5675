//! Terminal UI rendering.
//!
//! Everything drawn here is derived from the store's snapshot and
//! projection on each frame.

pub mod header;
pub mod input;
pub mod status_bar;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + stats
            Constraint::Length(3), // Input box
            Constraint::Length(2), // Error + character count
            Constraint::Min(3),    // Controls + task list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    header::render(frame, chunks[0], app);
    input::render(frame, chunks[1], app);
    input::render_feedback(frame, chunks[2], app);
    task_list::render(frame, chunks[3], app);
    status_bar::render(frame, chunks[4], app);
}
