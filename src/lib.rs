//! # `todo_store`
//!
//! The task store behind a single-user to-do list: an ordered list of tasks
//! with notes and attachment names, mirrored to local durable storage on
//! every change, plus the statistics and views a dashboard needs.

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod persistence;
pub mod preferences;
pub mod session;
pub mod storage;
pub mod tasks;
pub mod testing;
pub mod traits;

pub use error::{Error, Result};
pub use persistence::TaskPersistence;
pub use preferences::{Preferences, Theme};
pub use session::Session;
pub use storage::SqliteStore;
pub use tasks::{compute_stats, NewTask, Note, Task, TaskStats, TaskStore, TaskUpdate};
pub use traits::{Clock, KeyValueStore, SystemClock};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
