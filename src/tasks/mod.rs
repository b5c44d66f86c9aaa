//! Task management.
//!
//! This module provides the to-do list itself:
//! - Tasks with title, description, display time, priority, category,
//!   due date, attachment name and notes
//! - An ordered store that persists every mutation
//! - Completion statistics and list views for the dashboard and calendar
//!
//! # Example
//!
//! ```no_run
//! use todo_store::persistence::TaskPersistence;
//! use todo_store::storage::SqliteStore;
//! use todo_store::tasks::{compute_stats, NewTask, TaskStore};
//!
//! let backend = SqliteStore::new("/tmp/todo-store.sqlite3").unwrap();
//! let mut store = TaskStore::new(TaskPersistence::new(backend));
//!
//! store.add(NewTask::new("Buy milk")).unwrap();
//! let id = store.get_all()[0].id.clone();
//! store.toggle(&id);
//! store.append_note(&id, "got oat milk instead");
//!
//! let today = chrono::Local::now().date_naive();
//! let stats = compute_stats(store.get_all(), today);
//! assert_eq!(stats.completion_rate, 100);
//! ```

pub mod id;
pub mod models;
pub mod stats;
pub mod store;
pub mod views;

pub use models::{NewTask, Note, Task, TaskUpdate};
pub use stats::{compute_stats, TaskStats};
pub use store::TaskStore;
pub use views::{filter_by_day, filter_by_status, week_days, StatusFilter};
