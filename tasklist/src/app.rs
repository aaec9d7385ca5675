//! Application state and event handling.
//!
//! `App` translates key presses into [`TaskStore`] operations. It keeps
//! only presentation state of its own (focus, cursor, selection); every
//! task, view parameter and validation message lives in the store.

use std::fmt::Write as _;

use chrono::{Local, TimeZone};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tasklist_core::{MAX_TASK_TEXT_LENGTH, TaskId};

use crate::config::EditorConfig;
use crate::tasks::TaskStore;

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Input box is focused (default).
    Input,
    /// Task list is focused.
    Tasks,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    /// The task store being edited.
    pub store: TaskStore,
    /// Cursor position in the pending input (character index).
    pub cursor_position: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected row in the projected task list.
    pub selected: usize,
    /// chrono format used for creation dates.
    pub date_format: String,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create an application over an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(TaskStore::new())
    }

    /// Create an application over an existing store.
    #[must_use]
    pub fn with_store(store: TaskStore) -> Self {
        let cursor_position = store.pending_input().chars().count();
        Self {
            store,
            cursor_position,
            focus: PanelFocus::Input,
            selected: 0,
            date_format: EditorConfig::default().date_format,
            should_quit: false,
        }
    }

    /// Create an application from resolved configuration.
    #[must_use]
    pub fn from_config(config: &EditorConfig) -> Self {
        let store = if config.seed_samples {
            TaskStore::with_sample_tasks()
        } else {
            TaskStore::new()
        };
        Self::with_store(store.with_filter(config.filter).with_sort_by(config.sort_by))
            .with_date_format(config.date_format.clone())
    }

    /// Set the creation date format.
    #[must_use]
    pub fn with_date_format(mut self, date_format: String) -> Self {
        self.date_format = date_format;
        self
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.toggle_focus();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::Tasks => self.handle_tasks_key(key),
        }
    }

    /// Handle key event when input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_task(),
            KeyCode::Char(c) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char_before(),
            KeyCode::Delete => self.delete_char_at(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input_len(),
            _ => {}
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_tasks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Delete | KeyCode::Char('d') => self.remove_selected(),
            KeyCode::Char('f') => {
                let next = self.store.filter().next();
                self.store.set_filter(next);
                self.clamp_selection();
            }
            KeyCode::Char('s') => {
                let next = self.store.sort_by().next();
                self.store.set_sort_by(next);
            }
            KeyCode::Char('a') => {
                self.store.complete_all();
                self.clamp_selection();
            }
            KeyCode::Char('c') => {
                self.store.clear_completed();
                self.clamp_selection();
            }
            KeyCode::Char('X') => {
                self.store.clear_all();
                self.selected = 0;
            }
            _ => {}
        }
    }

    /// Switch focus between the input box and the task list.
    const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Input,
        };
    }

    /// Submit the pending input as a new task.
    ///
    /// A rejection is left on the store for the input panel to display.
    fn submit_task(&mut self) {
        if self.store.submit_pending().is_ok() {
            self.cursor_position = 0;
        }
    }

    /// Number of characters in the pending input.
    fn input_len(&self) -> usize {
        self.store.pending_input().chars().count()
    }

    /// Byte offset of the given character index in the pending input.
    fn byte_index(&self, char_index: usize) -> usize {
        let input = self.store.pending_input();
        input
            .char_indices()
            .nth(char_index)
            .map_or(input.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor position.
    ///
    /// Input stops growing at the maximum task length.
    fn enter_char(&mut self, c: char) {
        if self.input_len() >= MAX_TASK_TEXT_LENGTH {
            return;
        }
        let mut input = self.store.pending_input().to_string();
        input.insert(self.byte_index(self.cursor_position), c);
        self.store.set_pending_input(input);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char_before(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.delete_char_at();
        }
    }

    /// Delete the character under the cursor.
    fn delete_char_at(&mut self) {
        if self.cursor_position >= self.input_len() {
            return;
        }
        let mut input = self.store.pending_input().to_string();
        input.remove(self.byte_index(self.cursor_position));
        self.store.set_pending_input(input);
    }

    /// Move cursor left.
    const fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    /// Move cursor right.
    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input_len() {
            self.cursor_position += 1;
        }
    }

    /// Select the previous task.
    const fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Select the next task.
    fn select_next(&mut self) {
        if self.selected + 1 < self.store.project().len() {
            self.selected += 1;
        }
    }

    /// Keep the selection inside the current projection.
    fn clamp_selection(&mut self) {
        self.selected = self
            .selected
            .min(self.store.project().len().saturating_sub(1));
    }

    /// Id of the task under the selection, if any.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.store
            .project()
            .tasks
            .get(self.selected)
            .map(|t| t.id.clone())
    }

    /// Toggle completion of the selected task.
    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.toggle_task(&id);
            self.clamp_selection();
        }
    }

    /// Remove the selected task.
    fn remove_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.remove_task(&id);
            self.clamp_selection();
        }
    }

    /// Format a creation timestamp with the configured date format.
    #[must_use]
    pub fn format_date(&self, created_at_ms: u64) -> String {
        format_timestamp_ms(created_at_ms, &self.date_format)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Format an epoch-millisecond timestamp in local time.
///
/// Out-of-range timestamps and invalid format strings render as `"?"`.
#[must_use]
pub fn format_timestamp_ms(ms: u64, format: &str) -> String {
    let Ok(ms) = i64::try_from(ms) else {
        return "?".to_string();
    };
    let chrono::LocalResult::Single(dt) = Local.timestamp_millis_opt(ms) else {
        return "?".to_string();
    };
    let mut out = String::new();
    if write!(out, "{}", dt.format(format)).is_err() {
        return "?".to_string();
    }
    out
}
