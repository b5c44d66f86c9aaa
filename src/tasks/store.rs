//! The task store: the authoritative, ordered task list.
//!
//! Every effective mutation writes the whole list through the persistence
//! adapter straight after the in-memory change. Durability is best effort:
//! a failed write is logged and remembered, but the in-memory list is kept
//! as the source of truth for the session and is never rolled back. The
//! next successful mutation persists the full current state again.
//!
//! Operations that reference an unknown id are silent no-ops and do not
//! write anything.
//!
//! Loaded records are repaired before use so the list invariants hold from
//! the start: completion times match the completed flag and ids are unique.

use crate::error::{Error, Result};
use crate::persistence::TaskPersistence;
use crate::tasks::id::generate_task_id;
use crate::tasks::models::{
    iso_timestamp, NewTask, Note, Task, TaskUpdate, DEFAULT_CATEGORY, DEFAULT_PRIORITY,
    DEFAULT_TIME,
};
use crate::traits::{Clock, KeyValueStore, SystemClock};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Use `value` unless it is missing or empty.
fn non_empty_or(value: Option<String>, default: &str) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| default.to_string())
}

fn validate_title(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::Validation("task title must not be empty".to_string()));
    }
    Ok(())
}

/// Repair loaded records in place. Returns how many were changed.
///
/// A completed task missing its completion time is stamped with its creation
/// time; an open task loses any completion time. A record reusing an id seen
/// earlier in the list gets a fresh one.
fn normalize(tasks: &mut [Task], now: DateTime<Utc>) -> usize {
    let mut seen = HashSet::new();
    let mut repaired = 0;

    for idx in 0..tasks.len() {
        let task = &mut tasks[idx];
        let mut changed = task.completed != task.completed_at.is_some();
        if task.completed && task.completed_at.is_none() {
            task.completed_at = Some(if task.created_at.is_empty() {
                iso_timestamp(now)
            } else {
                task.created_at.clone()
            });
        } else if !task.completed {
            task.completed_at = None;
        }

        if !seen.insert(tasks[idx].id.clone()) {
            let id = generate_task_id(now, tasks);
            log::warn!("Task id {} is used more than once, reassigned to {id}", tasks[idx].id);
            seen.insert(id.clone());
            tasks[idx].id = id;
            changed = true;
        }

        repaired += usize::from(changed);
    }
    repaired
}

/// In-memory task list mirrored to durable storage.
///
/// Construct one per session and hand it to the presentation layer by
/// reference. All operations are synchronous and run to completion.
#[derive(Debug)]
pub struct TaskStore<S, C = SystemClock> {
    tasks: Vec<Task>,
    persistence: TaskPersistence<S>,
    clock: C,
    last_persist_failed: bool,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Load the persisted list and build a store on the system clock.
    ///
    /// Missing or corrupt persisted data gives an empty store.
    pub fn new(persistence: TaskPersistence<S>) -> Self {
        Self::with_clock(persistence, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> TaskStore<S, C> {
    /// Load the persisted list and build a store on the given clock.
    ///
    /// Missing or corrupt persisted data gives an empty store. Loaded
    /// records are repaired in memory; the repair reaches storage with the
    /// next mutation.
    pub fn with_clock(persistence: TaskPersistence<S>, clock: C) -> Self {
        let mut tasks = persistence.load();
        let repaired = normalize(&mut tasks, clock.now());
        if repaired > 0 {
            log::warn!("Repaired {repaired} loaded task(s)");
        }
        log::debug!("Loaded {} task(s)", tasks.len());
        Self { tasks, persistence, clock, last_persist_failed: false }
    }

    /// Snapshot of all tasks, most recent first unless reordered.
    pub fn get_all(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether there are no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The persistence adapter.
    pub const fn persistence(&self) -> &TaskPersistence<S> {
        &self.persistence
    }

    /// The clock timestamps are drawn from.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Whether the most recent write failed.
    ///
    /// The in-memory list is still current; the change may not survive a
    /// reload.
    pub const fn last_persist_failed(&self) -> bool {
        self.last_persist_failed
    }

    /// Create a task at the head of the list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the title is blank. Nothing is
    /// changed in that case.
    pub fn add(&mut self, input: NewTask) -> Result<&[Task]> {
        validate_title(&input.text)?;

        let now = self.clock.now();
        let task = Task {
            id: generate_task_id(now, &self.tasks),
            text: input.text,
            description: input.description.unwrap_or_default(),
            time: non_empty_or(input.time, DEFAULT_TIME),
            completed: false,
            priority: non_empty_or(input.priority, DEFAULT_PRIORITY),
            category: non_empty_or(input.category, DEFAULT_CATEGORY),
            due_date: input.due_date.filter(|d| !d.is_empty()),
            attachment: input.attachment.filter(|a| !a.is_empty()),
            notes: Vec::new(),
            created_at: iso_timestamp(now),
            completed_at: None,
            order: i64::try_from(self.tasks.len()).unwrap_or(i64::MAX),
        };

        log::debug!("Added task {}", task.id);
        self.tasks.insert(0, task);
        self.persist();
        Ok(&self.tasks)
    }

    /// Flip a task's completion state.
    ///
    /// Completing stamps `completedAt`; un-completing clears it.
    pub fn toggle(&mut self, id: &str) -> &[Task] {
        let Some(idx) = self.position(id) else {
            return &self.tasks;
        };

        let now = iso_timestamp(self.clock.now());
        let task = &mut self.tasks[idx];
        task.completed = !task.completed;
        task.completed_at = task.completed.then_some(now);

        log::debug!("Toggled task {id} to completed={}", task.completed);
        self.persist();
        &self.tasks
    }

    /// Merge the set fields of `update` into a task.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the update would blank the title.
    /// Nothing is changed in that case.
    pub fn update(&mut self, id: &str, update: TaskUpdate) -> Result<&[Task]> {
        if let Some(text) = &update.text {
            validate_title(text)?;
        }

        let Some(idx) = self.position(id) else {
            return Ok(&self.tasks);
        };
        if update.is_empty() {
            return Ok(&self.tasks);
        }

        self.merge(idx, update);
        log::debug!("Updated task {id}");
        self.persist();
        Ok(&self.tasks)
    }

    /// Delete a task.
    pub fn remove(&mut self, id: &str) -> &[Task] {
        let Some(idx) = self.position(id) else {
            return &self.tasks;
        };

        self.tasks.remove(idx);
        log::debug!("Removed task {id}");
        self.persist();
        &self.tasks
    }

    /// Move the task at `from` to `to`, shifting the tasks in between.
    ///
    /// Equal or out-of-range indices leave the list untouched.
    pub fn reorder(&mut self, from: usize, to: usize) -> &[Task] {
        let len = self.tasks.len();
        if from == to || from >= len || to >= len {
            return &self.tasks;
        }

        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        log::debug!("Moved task from {from} to {to}");
        self.persist();
        &self.tasks
    }

    /// Append a note to a task.
    ///
    /// The text is trimmed; blank notes are ignored.
    pub fn append_note(&mut self, id: &str, text: &str) -> &[Task] {
        let text = text.trim();
        if text.is_empty() {
            return &self.tasks;
        }
        let Some(idx) = self.position(id) else {
            return &self.tasks;
        };

        let mut notes = self.tasks[idx].notes.clone();
        notes.push(Note { text: text.to_string(), created_at: iso_timestamp(self.clock.now()) });
        self.merge(idx, TaskUpdate { notes: Some(notes), ..Default::default() });

        log::debug!("Appended note to task {id}");
        self.persist();
        &self.tasks
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Apply an already validated update to the task at `idx`.
    fn merge(&mut self, idx: usize, update: TaskUpdate) {
        let now = self.clock.now();
        let task = &mut self.tasks[idx];

        if let Some(text) = update.text {
            task.text = text;
        }
        if let Some(description) = update.description {
            task.description = description;
        }
        if let Some(time) = update.time {
            task.time = time;
        }
        if let Some(priority) = update.priority {
            task.priority = priority;
        }
        if let Some(category) = update.category {
            task.category = category;
        }
        if let Some(due_date) = update.due_date {
            task.due_date = due_date;
        }
        if let Some(attachment) = update.attachment {
            task.attachment = attachment;
        }
        if let Some(notes) = update.notes {
            task.notes = notes;
        }
        if let Some(completed) = update.completed {
            if completed != task.completed {
                task.completed = completed;
                task.completed_at = completed.then(|| iso_timestamp(now));
            }
        }
    }

    fn persist(&mut self) {
        self.last_persist_failed = !self.persistence.save(&self.tasks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::keys;
    use crate::testing::{FailingStore, FixedClock, MemoryStore};
    use chrono::Duration;

    type TestStore = TaskStore<MemoryStore, FixedClock>;

    fn create_test_store() -> TestStore {
        TaskStore::with_clock(TaskPersistence::new(MemoryStore::new()), FixedClock::default())
    }

    fn writes(store: &TestStore) -> usize {
        store.persistence().store().write_count()
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_add_applies_defaults() {
        let mut store = create_test_store();

        let tasks = store.add(NewTask::new("Buy milk")).unwrap();
        assert_eq!(tasks.len(), 1);

        let task = &tasks[0];
        assert_eq!(task.text, "Buy milk");
        assert_eq!(task.description, "");
        assert_eq!(task.time, "12.00pm");
        assert_eq!(task.priority, "medium");
        assert_eq!(task.category, "General");
        assert!(!task.completed);
        assert_eq!(task.completed_at, None);
        assert_eq!(task.due_date, None);
        assert_eq!(task.attachment, None);
        assert!(task.notes.is_empty());
        assert_eq!(task.created_at, "2024-03-15T09:30:00.000Z");
        assert_eq!(task.order, 0);
    }

    #[test]
    fn test_add_keeps_given_fields() {
        let mut store = create_test_store();

        store
            .add(NewTask {
                text: "Dentist".to_string(),
                description: Some("Bring insurance card".to_string()),
                time: Some("3.30pm".to_string()),
                priority: Some("high".to_string()),
                category: Some("Health".to_string()),
                due_date: Some("2024-03-20T15:30:00.000Z".to_string()),
                attachment: Some("referral.pdf".to_string()),
            })
            .unwrap();

        let task = &store.get_all()[0];
        assert_eq!(task.description, "Bring insurance card");
        assert_eq!(task.time, "3.30pm");
        assert_eq!(task.priority, "high");
        assert_eq!(task.category, "Health");
        assert_eq!(task.due_date.as_deref(), Some("2024-03-20T15:30:00.000Z"));
        assert_eq!(task.attachment.as_deref(), Some("referral.pdf"));
    }

    #[test]
    fn test_add_empty_strings_fall_back_to_defaults() {
        let mut store = create_test_store();

        store
            .add(NewTask {
                text: "Stretch".to_string(),
                time: Some(String::new()),
                priority: Some(String::new()),
                category: Some(String::new()),
                due_date: Some(String::new()),
                ..Default::default()
            })
            .unwrap();

        let task = &store.get_all()[0];
        assert_eq!(task.time, DEFAULT_TIME);
        assert_eq!(task.priority, DEFAULT_PRIORITY);
        assert_eq!(task.category, DEFAULT_CATEGORY);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let mut store = create_test_store();

        assert!(matches!(store.add(NewTask::new("")), Err(Error::Validation(_))));
        assert!(matches!(store.add(NewTask::new("   \t")), Err(Error::Validation(_))));

        assert!(store.is_empty());
        assert_eq!(writes(&store), 0);
    }

    #[test]
    fn test_add_prepends_with_unique_ids() {
        let mut store = create_test_store();

        store.add(NewTask::new("A")).unwrap();
        store.add(NewTask::new("B")).unwrap();
        store.add(NewTask::new("C")).unwrap();

        let tasks = store.get_all();
        assert_eq!(titles(tasks), vec!["C", "B", "A"]);
        // Same clock reading, so ids are bumped to stay unique
        assert_eq!(tasks[2].id, "1710495000000");
        assert_eq!(tasks[1].id, "1710495000001");
        assert_eq!(tasks[0].id, "1710495000002");
        assert_eq!(tasks[0].order, 2);
    }

    #[test]
    fn test_add_persists() {
        let mut store = create_test_store();
        store.add(NewTask::new("Buy milk")).unwrap();

        assert_eq!(writes(&store), 1);
        let raw = store.persistence().store().raw(keys::TASKS).unwrap();
        assert!(raw.contains("Buy milk"));
    }

    #[test]
    fn test_toggle_sets_and_clears_completed_at() {
        let mut store = create_test_store();
        store.add(NewTask::new("Run")).unwrap();
        let id = store.get_all()[0].id.clone();

        store.clock().advance(Duration::minutes(10));
        let task = &store.toggle(&id)[0];
        assert!(task.completed);
        assert_eq!(task.completed_at.as_deref(), Some("2024-03-15T09:40:00.000Z"));

        let task = &store.toggle(&id)[0];
        assert!(!task.completed);
        assert_eq!(task.completed_at, None);
        assert_eq!(writes(&store), 3);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = create_test_store();
        store.add(NewTask::new("Run")).unwrap();
        let before = store.get_all().to_vec();

        assert_eq!(store.toggle("missing"), before.as_slice());
        assert_eq!(writes(&store), 1);
    }

    #[test]
    fn test_update_merges_fields() {
        let mut store = create_test_store();
        store.add(NewTask::new("Buy milk")).unwrap();
        let id = store.get_all()[0].id.clone();

        store
            .update(
                &id,
                TaskUpdate {
                    description: Some("2% milk".to_string()),
                    category: Some("Groceries".to_string()),
                    attachment: Some(Some("receipt.png".to_string())),
                    ..Default::default()
                },
            )
            .unwrap();

        let task = store.get(&id).unwrap();
        assert_eq!(task.description, "2% milk");
        assert_eq!(task.category, "Groceries");
        assert_eq!(task.attachment.as_deref(), Some("receipt.png"));
        assert_eq!(task.text, "Buy milk");
        assert!(task.notes.is_empty());
    }

    #[test]
    fn test_update_clears_nullable_fields() {
        let mut store = create_test_store();
        store
            .add(NewTask {
                due_date: Some("2024-03-20".to_string()),
                attachment: Some("a.txt".to_string()),
                ..NewTask::new("Plan trip")
            })
            .unwrap();
        let id = store.get_all()[0].id.clone();

        store
            .update(
                &id,
                TaskUpdate { due_date: Some(None), attachment: Some(None), ..Default::default() },
            )
            .unwrap();

        let task = store.get(&id).unwrap();
        assert_eq!(task.due_date, None);
        assert_eq!(task.attachment, None);
    }

    #[test]
    fn test_update_completed_keeps_completed_at_consistent() {
        let mut store = create_test_store();
        store.add(NewTask::new("Read")).unwrap();
        let id = store.get_all()[0].id.clone();

        store.update(&id, TaskUpdate { completed: Some(true), ..Default::default() }).unwrap();
        let stamped = store.get(&id).unwrap().completed_at.clone();
        assert!(stamped.is_some());

        // Setting the same state again keeps the first stamp
        store.clock().advance(Duration::hours(1));
        store.update(&id, TaskUpdate { completed: Some(true), ..Default::default() }).unwrap();
        assert_eq!(store.get(&id).unwrap().completed_at, stamped);

        store.update(&id, TaskUpdate { completed: Some(false), ..Default::default() }).unwrap();
        let task = store.get(&id).unwrap();
        assert!(!task.completed);
        assert_eq!(task.completed_at, None);
    }

    #[test]
    fn test_update_rejects_blank_title() {
        let mut store = create_test_store();
        store.add(NewTask::new("Read")).unwrap();
        let id = store.get_all()[0].id.clone();

        let result = store.update(
            &id,
            TaskUpdate {
                text: Some("  ".to_string()),
                description: Some("ignored".to_string()),
                ..Default::default()
            },
        );

        assert!(matches!(result, Err(Error::Validation(_))));
        let task = store.get(&id).unwrap();
        assert_eq!(task.text, "Read");
        assert_eq!(task.description, "");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = create_test_store();
        store.add(NewTask::new("Read")).unwrap();

        let tasks = store
            .update("missing", TaskUpdate { text: Some("Test".to_string()), ..Default::default() })
            .unwrap();
        assert_eq!(tasks[0].text, "Read");
        assert_eq!(writes(&store), 1);
    }

    #[test]
    fn test_update_empty_does_nothing() {
        let mut store = create_test_store();
        store.add(NewTask::new("Read")).unwrap();
        let id = store.get_all()[0].id.clone();

        store.update(&id, TaskUpdate::default()).unwrap();
        assert_eq!(writes(&store), 1);
    }

    #[test]
    fn test_remove() {
        let mut store = create_test_store();
        store.add(NewTask::new("A")).unwrap();
        store.add(NewTask::new("B")).unwrap();
        let id = store.get_all()[1].id.clone();

        assert_eq!(store.remove(&id).len(), 1);
        assert!(store.get(&id).is_none());

        // Remove again (idempotent)
        assert_eq!(store.remove(&id).len(), 1);
        assert_eq!(writes(&store), 3);
    }

    #[test]
    fn test_reorder_moves_and_shifts() {
        let mut store = create_test_store();
        for title in ["A", "B", "C"] {
            store.add(NewTask::new(title)).unwrap();
        }

        assert_eq!(titles(store.reorder(0, 2)), vec!["B", "A", "C"]);
        assert_eq!(titles(store.reorder(2, 0)), vec!["C", "B", "A"]);
        assert_eq!(titles(store.reorder(1, 2)), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_reorder_invalid_indices_are_noops() {
        let mut store = create_test_store();
        for title in ["A", "B", "C"] {
            store.add(NewTask::new(title)).unwrap();
        }
        let before = writes(&store);

        assert_eq!(titles(store.reorder(1, 1)), vec!["C", "B", "A"]);
        assert_eq!(titles(store.reorder(3, 0)), vec!["C", "B", "A"]);
        assert_eq!(titles(store.reorder(0, 3)), vec!["C", "B", "A"]);
        assert_eq!(writes(&store), before);
    }

    #[test]
    fn test_reorder_does_not_touch_order_field() {
        let mut store = create_test_store();
        for title in ["A", "B"] {
            store.add(NewTask::new(title)).unwrap();
        }

        store.reorder(0, 1);
        let orders: Vec<i64> = store.get_all().iter().map(|t| t.order).collect();
        assert_eq!(orders, vec![0, 1]);
    }

    #[test]
    fn test_append_note() {
        let mut store = create_test_store();
        store.add(NewTask::new("Write report")).unwrap();
        let id = store.get_all()[0].id.clone();

        store.append_note(&id, "  outline done ");
        store.clock().advance(Duration::minutes(5));
        store.append_note(&id, "intro drafted");

        let notes = &store.get(&id).unwrap().notes;
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].text, "outline done");
        assert_eq!(notes[0].created_at, "2024-03-15T09:30:00.000Z");
        assert_eq!(notes[1].text, "intro drafted");
        assert_eq!(notes[1].created_at, "2024-03-15T09:35:00.000Z");
    }

    #[test]
    fn test_append_blank_note_is_ignored() {
        let mut store = create_test_store();
        store.add(NewTask::new("Write report")).unwrap();
        let id = store.get_all()[0].id.clone();

        store.append_note(&id, "   ");
        store.append_note("missing", "text");

        assert!(store.get(&id).unwrap().notes.is_empty());
        assert_eq!(writes(&store), 1);
    }

    #[test]
    fn test_initialize_loads_persisted_tasks() {
        let memory = MemoryStore::new();
        {
            let mut store =
                TaskStore::with_clock(TaskPersistence::new(&memory), FixedClock::default());
            store.add(NewTask::new("A")).unwrap();
            store.add(NewTask::new("B")).unwrap();
        }

        let reloaded = TaskStore::with_clock(TaskPersistence::new(&memory), FixedClock::default());
        assert_eq!(titles(reloaded.get_all()), vec!["B", "A"]);
    }

    #[test]
    fn test_initialize_with_corrupt_data_starts_empty() {
        let memory = MemoryStore::with_value(keys::TASKS, "[{\"broken\"");
        let mut store = TaskStore::with_clock(TaskPersistence::new(&memory), FixedClock::default());
        assert!(store.is_empty());

        // The next mutation overwrites the corrupt value
        store.add(NewTask::new("Fresh start")).unwrap();
        let reloaded = TaskStore::with_clock(TaskPersistence::new(&memory), FixedClock::default());
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_initialize_stamps_completed_legacy_records() {
        // Older versions flipped `completed` without recording when
        let json = r#"[
            {"id": "1", "text": "Done long ago", "completed": true,
             "createdAt": "2024-03-10T08:00:00.000Z"},
            {"id": "2", "text": "Reopened", "completed": false,
             "completedAt": "2024-03-11T08:00:00.000Z",
             "createdAt": "2024-03-09T08:00:00.000Z"},
            {"id": "3", "text": "Done", "completed": true,
             "completedAt": "2024-03-12T08:00:00.000Z",
             "createdAt": "2024-03-12T07:00:00.000Z"}
        ]"#;
        let memory = MemoryStore::with_value(keys::TASKS, json);
        let store = TaskStore::with_clock(TaskPersistence::new(&memory), FixedClock::default());

        let tasks = store.get_all();
        assert_eq!(tasks[0].completed_at.as_deref(), Some("2024-03-10T08:00:00.000Z"));
        assert_eq!(tasks[1].completed_at, None);
        assert_eq!(tasks[2].completed_at.as_deref(), Some("2024-03-12T08:00:00.000Z"));
        assert!(tasks.iter().all(|t| t.completed == t.completed_at.is_some()));

        // Loading alone does not write
        assert_eq!(memory.write_count(), 0);
    }

    #[test]
    fn test_initialize_keeps_records_with_null_fields() {
        let json = r#"[
            {"id": "1", "text": "a", "notes": null, "priority": null,
             "completed": null, "createdAt": "2024-03-15T08:00:00.000Z"},
            {"id": "2", "text": "b", "createdAt": "2024-03-15T08:00:00.000Z"}
        ]"#;
        let memory = MemoryStore::with_value(keys::TASKS, json);
        let mut store =
            TaskStore::with_clock(TaskPersistence::new(&memory), FixedClock::default());

        assert_eq!(titles(store.get_all()), vec!["a", "b"]);
        assert!(store.get("1").unwrap().notes.is_empty());
        assert_eq!(store.get("1").unwrap().priority, DEFAULT_PRIORITY);

        // A later write keeps both records
        store.append_note("1", "first note");
        let reloaded = TaskStore::with_clock(TaskPersistence::new(&memory), FixedClock::default());
        assert_eq!(titles(reloaded.get_all()), vec!["a", "b"]);
        assert_eq!(reloaded.get("1").unwrap().notes.len(), 1);
    }

    #[test]
    fn test_initialize_reassigns_duplicate_ids() {
        let json = r#"[
            {"id": "1", "text": "a", "createdAt": "2024-03-15T08:00:00.000Z"},
            {"id": "1", "text": "b", "createdAt": "2024-03-15T08:00:00.000Z"},
            {"id": "1710495000000", "text": "c", "createdAt": "2024-03-15T08:00:00.000Z"}
        ]"#;
        let memory = MemoryStore::with_value(keys::TASKS, json);
        let mut store =
            TaskStore::with_clock(TaskPersistence::new(&memory), FixedClock::default());

        let ids: HashSet<&str> = store.get_all().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(store.get_all()[0].id, "1");
        assert_eq!(store.get_all()[1].id, "1710495000001");

        store.remove("1");
        assert_eq!(titles(store.get_all()), vec!["b", "c"]);
        assert!(store.get("1").is_none());
    }

    #[test]
    fn test_initialize_with_unreadable_storage_starts_empty() {
        let store = TaskStore::new(TaskPersistence::new(FailingStore::new("unreadable")));
        assert!(store.is_empty());
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut store =
            TaskStore::with_clock(TaskPersistence::new(FailingStore::new("quota")), FixedClock::default());

        store.add(NewTask::new("Still here")).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.last_persist_failed());

        let id = store.get_all()[0].id.clone();
        assert!(store.toggle(&id)[0].completed);
    }

    #[test]
    fn test_next_successful_write_persists_full_state() {
        let memory = MemoryStore::new();
        let mut store = TaskStore::with_clock(TaskPersistence::new(&memory), FixedClock::default());

        memory.set_fail_writes(true);
        store.add(NewTask::new("A")).unwrap();
        assert!(store.last_persist_failed());

        memory.set_fail_writes(false);
        store.add(NewTask::new("B")).unwrap();
        assert!(!store.last_persist_failed());

        let reloaded = TaskStore::with_clock(TaskPersistence::new(&memory), FixedClock::default());
        assert_eq!(titles(reloaded.get_all()), vec!["B", "A"]);
    }
}
