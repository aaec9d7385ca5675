//! Integration tests for the task store.
//!
//! Exercises the store through its public API the way a renderer would:
//! compose input, submit, change the view, run bulk actions, and read
//! back the snapshot and projection.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::thread;

use tasklist::tasks::{SharedTaskStore, TaskStore, sample_tasks};
use tasklist_core::{Filter, SortOrder, TaskError, TaskId, TaskStats, ValidationError};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Texts of the current projection, in display order.
fn view_texts(store: &TaskStore) -> Vec<String> {
    store
        .project()
        .tasks
        .iter()
        .map(|t| t.text.clone())
        .collect()
}

/// Types `text` into the store and submits it.
fn submit(store: &mut TaskStore, text: &str) -> Result<TaskId, TaskError> {
    store.set_pending_input(text);
    store.submit_pending()
}

// ===========================================================================
// Validation through the store
// ===========================================================================

#[test]
fn duplicate_rejected_with_reason() {
    let mut store = TaskStore::new();
    submit(&mut store, "Buy milk").unwrap();

    let err = submit(&mut store, "  buy milk  ").unwrap_err();
    assert_eq!(err.to_string(), "Task already exists");
    assert_eq!(store.snapshot().validation_error, Some(ValidationError::Duplicate));
    assert_eq!(store.stats().total, 1);
}

#[test]
fn length_boundary() {
    let mut store = TaskStore::new();
    assert!(store.add_task(&"a".repeat(100)).is_ok());

    let err = store.add_task(&"b".repeat(101)).unwrap_err();
    assert_eq!(err.to_string(), "Task must be less than 100 characters");
}

#[test]
fn empty_rejected() {
    let mut store = TaskStore::new();
    let err = store.add_task("   ").unwrap_err();
    assert_eq!(err, TaskError::ValidationRejected(ValidationError::Empty));
    assert_eq!(err.to_string(), "Task cannot be empty");
}

#[test]
fn duplicate_of_removed_task_is_allowed() {
    let mut store = TaskStore::new();
    let id = store.add_task("Call mom").unwrap();
    store.remove_task(&id);
    assert!(store.add_task("call mom").is_ok());
}

#[test]
fn error_cleared_by_typing_after_rejection() {
    let mut store = TaskStore::new();
    submit(&mut store, "").unwrap_err();
    assert_eq!(store.validation_error(), Some(ValidationError::Empty));

    store.set_pending_input("F");
    assert_eq!(store.validation_error(), None);
    assert_eq!(store.pending_input(), "F");
}

// ===========================================================================
// Mutations
// ===========================================================================

#[test]
fn remove_absent_id_twice_is_idempotent() {
    let mut store = TaskStore::with_sample_tasks();
    let ghost = TaskId::new();
    let before = store.tasks().to_vec();

    assert!(!store.remove_task(&ghost));
    assert!(!store.remove_task(&ghost));
    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn toggle_changes_only_completion() {
    let mut store = TaskStore::new();
    let id = store.add_task("Read book").unwrap();
    let before = store.get(&id).unwrap().clone();

    store.toggle_task(&id);
    let after = store.get(&id).unwrap();
    assert!(after.completed);
    assert_eq!(after.text, before.text);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.id, before.id);
}

#[test]
fn bulk_operations_postconditions() {
    let mut store = TaskStore::with_sample_tasks();
    store.add_task("one").unwrap();
    store.add_task("two").unwrap();

    store.complete_all();
    let stats = store.stats();
    assert_eq!(stats.active, 0);
    assert_eq!(stats.completed, stats.total);

    let id = store.tasks()[3].id.clone();
    store.toggle_task(&id);
    assert_eq!(store.clear_completed(), 3);
    assert!(store.tasks().iter().all(|t| !t.completed));
    assert_eq!(view_texts(&store), vec!["two"]);

    store.clear_all();
    assert_eq!(store.stats(), TaskStats::default());
}

// ===========================================================================
// View parameters and projection
// ===========================================================================

#[test]
fn filter_and_sort_change_only_the_view() {
    let mut store = TaskStore::with_sample_tasks();
    let canonical: Vec<String> = store.tasks().iter().map(|t| t.text.clone()).collect();

    assert_eq!(
        view_texts(&store),
        vec!["Sample pending task", "Sample completed task"]
    );

    store.set_sort_by(SortOrder::Oldest);
    assert_eq!(
        view_texts(&store),
        vec!["Sample completed task", "Sample pending task"]
    );

    store.set_filter(Filter::Completed);
    assert_eq!(view_texts(&store), vec!["Sample completed task"]);
    assert_eq!(store.project().stats.total, 2);

    let after: Vec<String> = store.tasks().iter().map(|t| t.text.clone()).collect();
    assert_eq!(canonical, after);
}

#[test]
fn alphabetical_view_ignores_case() {
    let mut store = TaskStore::new().with_sort_by(SortOrder::Alphabetical);
    for text in ["Banana", "apple", "Cherry"] {
        store.add_task(text).unwrap();
    }
    assert_eq!(view_texts(&store), vec!["apple", "Banana", "Cherry"]);
}

#[test]
fn unknown_view_names_rejected_without_change() {
    let mut store = TaskStore::new();
    assert!(matches!(
        store.set_filter_name("archived"),
        Err(TaskError::InvalidArgument { .. })
    ));
    assert!(matches!(
        store.set_sort_name("random"),
        Err(TaskError::InvalidArgument { .. })
    ));
    assert_eq!(store.filter(), Filter::All);
    assert_eq!(store.sort_by(), SortOrder::Newest);

    store.set_filter_name("Active").unwrap();
    store.set_sort_name("OLDEST").unwrap();
    assert_eq!(store.filter(), Filter::Active);
    assert_eq!(store.sort_by(), SortOrder::Oldest);
}

#[test]
fn snapshot_exposes_full_state() {
    let mut store = TaskStore::with_sample_tasks().with_filter(Filter::Active);
    store.set_pending_input("draft");

    let snap = store.snapshot();
    assert_eq!(snap.tasks.len(), 2);
    assert_eq!(snap.filter, Filter::Active);
    assert_eq!(snap.sort_by, SortOrder::Newest);
    assert_eq!(snap.pending_input, "draft");
    assert_eq!(snap.validation_error, None);
}

#[test]
fn sample_tasks_are_fixed() {
    let samples = sample_tasks();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].text, "Sample completed task");
    assert!(samples[0].completed);
    assert_eq!(samples[1].text, "Sample pending task");
    assert!(!samples[1].completed);
    assert!(samples[0].created_at < samples[1].created_at);
}

// ===========================================================================
// Shared store
// ===========================================================================

#[test]
fn shared_store_serializes_writers() {
    let shared = SharedTaskStore::new(TaskStore::with_sample_tasks());
    let writers: Vec<_> = (0..4)
        .map(|i| {
            let store = shared.clone();
            thread::spawn(move || {
                for j in 0..25 {
                    store
                        .update(|s| s.add_task(&format!("writer {i} item {j}")))
                        .expect("unique text");
                }
            })
        })
        .collect();
    for w in writers {
        w.join().expect("writer panicked");
    }

    shared.update(TaskStore::complete_all);
    let stats = shared.read(TaskStore::stats);
    assert_eq!(stats.total, 102);
    assert_eq!(stats.completed, 102);
}
