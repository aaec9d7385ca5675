//! Filtered and sorted views over a task collection.
//!
//! A projection borrows the canonical collection and never reorders or
//! mutates it. Sorting is stable, so tasks that compare equal keep their
//! relative insertion order.

use std::cmp::Reverse;

use serde::Serialize;

use crate::task::{Filter, SortOrder, Task};

/// Aggregate counts over the whole (unfiltered) collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    /// Number of tasks held.
    pub total: usize,
    /// Tasks not yet completed.
    pub active: usize,
    /// Tasks marked completed.
    pub completed: usize,
}

/// The ordered view shown to the user plus counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection<'a> {
    /// Tasks passing the filter, in display order.
    pub tasks: Vec<&'a Task>,
    /// Counts over the unfiltered collection.
    pub stats: TaskStats,
}

impl Projection<'_> {
    /// Returns `true` when no task passes the filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks in the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

/// Counts tasks by completion state.
#[must_use]
pub fn stats(tasks: &[Task]) -> TaskStats {
    let completed = tasks.iter().filter(|t| t.completed).count();
    TaskStats {
        total: tasks.len(),
        active: tasks.len() - completed,
        completed,
    }
}

/// Sorts `tasks` in place according to `order`.
///
/// Ties keep their existing relative order.
pub fn sort_tasks(tasks: &mut [&Task], order: SortOrder) {
    match order {
        SortOrder::Newest => tasks.sort_by_key(|t| Reverse(t.created_at)),
        SortOrder::Oldest => tasks.sort_by_key(|t| t.created_at),
        SortOrder::Alphabetical => tasks.sort_by_cached_key(|t| t.text.to_lowercase()),
    }
}

/// Builds the view for `filter` and `order` over `tasks`.
#[must_use]
pub fn project(tasks: &[Task], filter: Filter, order: SortOrder) -> Projection<'_> {
    let mut view: Vec<&Task> = tasks.iter().filter(|t| filter.matches(t)).collect();
    sort_tasks(&mut view, order);
    Projection {
        tasks: view,
        stats: stats(tasks),
    }
}
