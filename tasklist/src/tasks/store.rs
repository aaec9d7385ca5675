//! Task store for task CRUD, bulk actions and view state.
//!
//! `TaskStore` is the single source of truth for one editing session.
//! Every operation runs to completion on `&mut self`, so callers never
//! observe a half-applied change.

use std::time::{SystemTime, UNIX_EPOCH};

use tasklist_core::{
    Filter, Projection, SortOrder, Task, TaskError, TaskId, TaskStats, ValidationError, project,
    stats, validate,
};

/// 2024-01-01T00:00:00Z in milliseconds since epoch.
const SAMPLE_COMPLETED_CREATED_AT: u64 = 1_704_067_200_000;
/// 2024-01-02T00:00:00Z in milliseconds since epoch.
const SAMPLE_PENDING_CREATED_AT: u64 = 1_704_153_600_000;

/// Returns the two demo tasks a fresh editor starts with.
#[must_use]
pub fn sample_tasks() -> Vec<Task> {
    let mut done = Task::new("Sample completed task", SAMPLE_COMPLETED_CREATED_AT);
    done.completed = true;
    let pending = Task::new("Sample pending task", SAMPLE_PENDING_CREATED_AT);
    vec![done, pending]
}

/// Read-only view of everything a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSnapshot<'a> {
    /// All tasks in insertion order.
    pub tasks: &'a [Task],
    /// Active filter.
    pub filter: Filter,
    /// Active sort order.
    pub sort_by: SortOrder,
    /// Text being composed but not yet submitted.
    pub pending_input: &'a str,
    /// Reason the last add was rejected, until cleared.
    pub validation_error: Option<ValidationError>,
}

/// Owns the task collection and view parameters for one session.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    /// Tasks in insertion order.
    tasks: Vec<Task>,
    filter: Filter,
    sort_by: SortOrder,
    pending_input: String,
    validation_error: Option<ValidationError>,
}

impl TaskStore {
    /// Creates an empty store with the default view (all, newest first).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the [`sample_tasks`].
    #[must_use]
    pub fn with_sample_tasks() -> Self {
        Self {
            tasks: sample_tasks(),
            ..Self::default()
        }
    }

    /// Sets the initial filter.
    #[must_use]
    pub const fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the initial sort order.
    #[must_use]
    pub const fn with_sort_by(mut self, sort_by: SortOrder) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Returns the current timestamp in milliseconds since epoch.
    fn now_ms() -> u64 {
        u64::try_from(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
        )
        .unwrap_or(u64::MAX)
    }

    /// Validates `text` and appends it as a new active task.
    ///
    /// On success the text is stored trimmed, and the pending input and
    /// any previous validation error are cleared. On rejection the reason
    /// is kept as the store's validation error and the collection is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::ValidationRejected`] if `text` is empty, longer
    /// than 100 characters, or duplicates an existing task.
    pub fn add_task(&mut self, text: &str) -> Result<TaskId, TaskError> {
        if let Err(reason) = validate(text, &self.tasks) {
            tracing::debug!(%reason, "task rejected");
            self.validation_error = Some(reason);
            return Err(reason.into());
        }

        let task = Task::new(text.trim(), Self::now_ms());
        let id = task.id.clone();
        tracing::debug!(task_id = %id, "task added");

        self.tasks.push(task);
        self.pending_input.clear();
        self.validation_error = None;
        Ok(id)
    }

    /// Adds the pending input as a task.
    ///
    /// # Errors
    ///
    /// Same as [`add_task`](Self::add_task); the pending input is kept
    /// on rejection so it can be corrected.
    pub fn submit_pending(&mut self) -> Result<TaskId, TaskError> {
        let input = self.pending_input.clone();
        self.add_task(&input)
    }

    /// Removes the task with `id`. Returns `false` if it was not present.
    pub fn remove_task(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            tracing::debug!(task_id = %id, "task removed");
        }
        removed
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// Returns the new flag, or `None` if no such task exists.
    pub fn toggle_task(&mut self, id: &TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| &t.id == id)?;
        task.completed = !task.completed;
        tracing::debug!(task_id = %id, completed = task.completed, "task toggled");
        Some(task.completed)
    }

    /// Replaces the active filter.
    pub fn set_filter(&mut self, filter: Filter) {
        tracing::debug!(%filter, "filter changed");
        self.filter = filter;
    }

    /// Replaces the active sort order.
    pub fn set_sort_by(&mut self, sort_by: SortOrder) {
        tracing::debug!(%sort_by, "sort order changed");
        self.sort_by = sort_by;
    }

    /// Parses and applies a filter name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::InvalidArgument`] for anything other than
    /// `all`, `active` or `completed`; the filter is left unchanged.
    pub fn set_filter_name(&mut self, name: &str) -> Result<(), TaskError> {
        let filter = name.parse()?;
        self.set_filter(filter);
        Ok(())
    }

    /// Parses and applies a sort order name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::InvalidArgument`] for anything other than
    /// `newest`, `oldest` or `alphabetical`; the order is left unchanged.
    pub fn set_sort_name(&mut self, name: &str) -> Result<(), TaskError> {
        let sort_by = name.parse()?;
        self.set_sort_by(sort_by);
        Ok(())
    }

    /// Marks every task completed.
    pub fn complete_all(&mut self) {
        for task in &mut self.tasks {
            task.completed = true;
        }
        tracing::info!(count = self.tasks.len(), "completed all tasks");
    }

    /// Removes every completed task and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        tracing::info!(removed, "cleared completed tasks");
        removed
    }

    /// Removes every task.
    pub fn clear_all(&mut self) {
        let removed = self.tasks.len();
        self.tasks.clear();
        tracing::info!(removed, "cleared all tasks");
    }

    /// Replaces the text being composed.
    ///
    /// A pending validation error is dropped as soon as the input holds
    /// something other than whitespace.
    pub fn set_pending_input(&mut self, input: impl Into<String>) {
        self.pending_input = input.into();
        if self.validation_error.is_some() && !self.pending_input.trim().is_empty() {
            self.validation_error = None;
        }
    }

    /// Text being composed.
    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Reason the last add was rejected, if not yet cleared.
    #[must_use]
    pub const fn validation_error(&self) -> Option<ValidationError> {
        self.validation_error
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Returns `true` if the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Active filter.
    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// Active sort order.
    #[must_use]
    pub const fn sort_by(&self) -> SortOrder {
        self.sort_by
    }

    /// Counts over the whole collection.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        stats(&self.tasks)
    }

    /// Filtered and sorted view for the current view parameters.
    #[must_use]
    pub fn project(&self) -> Projection<'_> {
        project(&self.tasks, self.filter, self.sort_by)
    }

    /// Borrowed view of the full store state.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot<'_> {
        StoreSnapshot {
            tasks: &self.tasks,
            filter: self.filter,
            sort_by: self.sort_by,
            pending_input: &self.pending_input,
            validation_error: self.validation_error,
        }
    }
}
