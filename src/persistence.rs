//! Whole-list persistence for tasks.
//!
//! The full task list is serialized to JSON and written under a single key
//! on every save; there are no partial writes. Loading never fails: a
//! missing key, an unreadable backend or corrupt JSON all yield an empty
//! list, with the condition logged. A single unreadable record inside an
//! otherwise valid list is skipped, not allowed to sink the rest.

use crate::error::Result;
use crate::storage::keys;
use crate::tasks::models::Task;
use crate::traits::KeyValueStore;

/// Persistence adapter between the in-memory task list and a
/// [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct TaskPersistence<S> {
    store: S,
}

impl<S: KeyValueStore> TaskPersistence<S> {
    /// Wrap a key-value store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying key-value store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Serialize and write the whole list.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn try_save(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string(tasks)?;
        self.store.set(keys::TASKS, &json)
    }

    /// Serialize and write the whole list, logging any failure.
    ///
    /// Returns whether the write succeeded. Nothing is retried.
    pub fn save(&self, tasks: &[Task]) -> bool {
        match self.try_save(tasks) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to save {} task(s): {e}", tasks.len());
                false
            }
        }
    }

    /// Read and parse the persisted list.
    ///
    /// A missing key is an empty list, not an error. Records that do not
    /// parse as tasks are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or the stored JSON is
    /// not a list.
    pub fn try_load(&self) -> Result<Vec<Task>> {
        let Some(json) = self.store.get(keys::TASKS)? else {
            return Ok(Vec::new());
        };
        let records: Vec<serde_json::Value> = serde_json::from_str(&json)?;

        let mut tasks = Vec::with_capacity(records.len());
        for (idx, record) in records.into_iter().enumerate() {
            match serde_json::from_value(record) {
                Ok(task) => tasks.push(task),
                Err(e) => log::warn!("Skipping unreadable task record {idx}: {e}"),
            }
        }
        Ok(tasks)
    }

    /// Read the persisted list, falling back to an empty list on any failure.
    pub fn load(&self) -> Vec<Task> {
        self.try_load().unwrap_or_else(|e| {
            log::warn!("Failed to load tasks, starting with an empty list: {e}");
            Vec::new()
        })
    }
}
