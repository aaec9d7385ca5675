//! In-memory task store.
//!
//! [`TaskStore`] owns the task collection together with the view
//! parameters (filter, sort order) and the input being composed.
//! [`SharedTaskStore`] wraps one store behind a mutex for callers that
//! need to hand it across threads.

pub mod shared;
pub mod store;

pub use shared::SharedTaskStore;
pub use store::{StoreSnapshot, TaskStore, sample_tasks};
