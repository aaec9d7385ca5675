//! Mutex-guarded handle to a single [`TaskStore`].

use std::sync::Arc;

use parking_lot::Mutex;

use super::store::TaskStore;

/// Cloneable handle serializing all access to one store.
///
/// The terminal front end owns a bare [`TaskStore`] on its single thread.
/// This handle is what the library offers to multi-threaded embedders that
/// need several threads to drive the same list.
///
/// Every clone refers to the same store. Closures passed to
/// [`read`](Self::read) and [`update`](Self::update) run with the lock
/// held, so each one observes and applies a complete operation.
#[derive(Debug, Clone, Default)]
pub struct SharedTaskStore {
    inner: Arc<Mutex<TaskStore>>,
}

impl SharedTaskStore {
    /// Wraps `store` in a new shared handle.
    #[must_use]
    pub fn new(store: TaskStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `f` with shared access to the store.
    pub fn read<R>(&self, f: impl FnOnce(&TaskStore) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Runs `f` with exclusive access to the store.
    pub fn update<R>(&self, f: impl FnOnce(&mut TaskStore) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Returns a copy of the current store state.
    #[must_use]
    pub fn cloned(&self) -> TaskStore {
        self.inner.lock().clone()
    }
}

impl From<TaskStore> for SharedTaskStore {
    fn from(store: TaskStore) -> Self {
        Self::new(store)
    }
}
