//! Read-only views over a task list: completion filter, calendar-day filter
//! and the Monday-first week strip.

use crate::tasks::models::Task;
use chrono::{DateTime, Datelike, Days, NaiveDate};

/// Which tasks a list shows by completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Completed tasks.
    Completed,
}

impl StatusFilter {
    /// Whether `task` passes this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// The calendar day a due date falls on.
///
/// Date-times are read in the offset they were written with; bare
/// `YYYY-MM-DD` dates are taken as is. Anything else has no day.
#[must_use]
pub fn due_day(due_date: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(due_date)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(due_date, "%Y-%m-%d"))
        .ok()
}

/// Whether a task is due on `day`.
#[must_use]
pub fn is_due_on(task: &Task, day: NaiveDate) -> bool {
    task.due_date.as_deref().and_then(due_day) == Some(day)
}

/// Tasks passing `filter`, in list order.
#[must_use]
pub fn filter_by_status(tasks: &[Task], filter: StatusFilter) -> Vec<&Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

/// Tasks shown for a selected calendar day: those due that day plus those
/// with no due date at all.
#[must_use]
pub fn filter_by_day(tasks: &[Task], day: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|t| t.due_date.is_none() || is_due_on(t, day)).collect()
}

/// The Monday-to-Sunday week containing `day`.
///
/// Returns `None` when that week runs past the representable date range.
#[must_use]
pub fn week_days(day: NaiveDate) -> Option<[NaiveDate; 7]> {
    let monday =
        day.checked_sub_days(Days::new(u64::from(day.weekday().num_days_from_monday())))?;

    let mut week = [monday; 7];
    for (offset, slot) in (0..).zip(&mut week) {
        *slot = monday.checked_add_days(Days::new(offset))?;
    }
    Some(week)
}
