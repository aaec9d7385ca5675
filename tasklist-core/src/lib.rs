//! Shared task model for `tasklist`.
//!
//! Everything in this crate is a pure function of its inputs: the task
//! record and view parameters, the admission check applied before a task
//! enters a store, and the filtered/sorted projection shown to the user.

pub mod error;
pub mod projection;
pub mod task;
pub mod validate;

pub use error::TaskError;
pub use projection::{Projection, TaskStats, project, sort_tasks, stats};
pub use task::{Filter, MAX_TASK_TEXT_LENGTH, SortOrder, Task, TaskId};
pub use validate::{ValidationError, validate};
