//! Dashboard statistics derived from the task list.
//!
//! Nothing here is stored; values are recomputed from the current list on
//! every read.

use crate::tasks::models::Task;
use crate::tasks::views::is_due_on;
use chrono::NaiveDate;

/// Aggregate counts over a task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// `total - completed`.
    pub pending: usize,
    /// Percentage of tasks completed, rounded half up. 0 for an empty list.
    pub completion_rate: u32,
    /// Number of tasks due on the reference day.
    pub due_on_reference: usize,
}

/// Compute statistics for `tasks` relative to the `reference` day.
#[must_use]
pub fn compute_stats(tasks: &[Task], reference: NaiveDate) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let due_on_reference = tasks.iter().filter(|t| is_due_on(t, reference)).count();

    TaskStats {
        total,
        completed,
        pending: total - completed,
        completion_rate: completion_rate(completed, total),
        due_on_reference,
    }
}

/// `round(completed / total * 100)` in integer arithmetic.
#[allow(clippy::cast_possible_truncation)]
fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let (completed, total) = (completed as u64, total as u64);
    // Never exceeds 100
    ((completed * 200 + total) / (total * 2)) as u32
}
