//! Task ID generation utilities.
//!
//! Task IDs are the creation time in milliseconds since the Unix epoch,
//! written in decimal. When two tasks are created within the same
//! millisecond the later one is bumped forward until it is unique.

use crate::tasks::models::Task;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Generate a task ID for a task created at `now`.
///
/// The result is unique among `existing`.
#[must_use]
pub fn generate_task_id(now: DateTime<Utc>, existing: &[Task]) -> String {
    let taken: HashSet<&str> = existing.iter().map(|t| t.id.as_str()).collect();

    let mut candidate = now.timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !taken.contains(id.as_str()) {
            return id;
        }
        candidate += 1;
    }
}
