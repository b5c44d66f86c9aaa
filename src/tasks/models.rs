//! Task model types for the to-do list.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Display time used when none is given.
pub const DEFAULT_TIME: &str = "12.00pm";
/// Priority used when none is given.
pub const DEFAULT_PRIORITY: &str = "medium";
/// Category used when none is given.
pub const DEFAULT_CATEGORY: &str = "General";

fn default_time() -> String {
    DEFAULT_TIME.to_string()
}

fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Read an explicit `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_time<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::deserialize(deserializer)?.unwrap_or_else(default_time))
}

fn null_as_default_priority<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Ok(Option::deserialize(deserializer)?.unwrap_or_else(default_priority))
}

fn null_as_default_category<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Ok(Option::deserialize(deserializer)?.unwrap_or_else(default_category))
}

/// Format an instant the way task timestamps are stored
/// (`2024-03-15T09:30:00.000Z`).
#[must_use]
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A note appended to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Note content.
    pub text: String,
    /// ISO 8601 timestamp when the note was added.
    pub created_at: String,
}

/// A task in the to-do list.
///
/// Field names serialize in camelCase; every field except `id`, `text` and
/// `createdAt` has a default so older persisted records load cleanly. An
/// explicit `null` reads the same as a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique, time-based identifier. Never changes.
    pub id: String,
    /// Title. Never empty.
    pub text: String,
    /// Longer free-form description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Free-form display label such as `"12.00pm"`.
    #[serde(default = "default_time", deserialize_with = "null_as_default_time")]
    pub time: String,
    /// Whether the task is done.
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
    /// Free-form priority label (`"medium"` unless set).
    #[serde(default = "default_priority", deserialize_with = "null_as_default_priority")]
    pub priority: String,
    /// Category label.
    #[serde(default = "default_category", deserialize_with = "null_as_default_category")]
    pub category: String,
    /// ISO 8601 date-time (or date) tying the task to a calendar day.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Attachment filename. Only the name is kept.
    #[serde(default)]
    pub attachment: Option<String>,
    /// Notes in the order they were added.
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: Vec<Note>,
    /// ISO 8601 timestamp when the task was created. Never changes.
    pub created_at: String,
    /// ISO 8601 timestamp of completion; present exactly when `completed`.
    #[serde(default)]
    pub completed_at: Option<String>,
    /// Position in the list at creation time. Informational only.
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i64,
}

/// Input for creating a task.
///
/// Only `text` is required. Empty strings for `time`, `priority` and
/// `category` fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewTask {
    /// Title (required, must not be blank).
    pub text: String,
    /// Description.
    pub description: Option<String>,
    /// Display time label.
    pub time: Option<String>,
    /// Priority label.
    pub priority: Option<String>,
    /// Category label.
    pub category: Option<String>,
    /// Due date.
    pub due_date: Option<String>,
    /// Attachment filename.
    pub attachment: Option<String>,
}

impl NewTask {
    /// Input with just a title.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Default::default() }
    }
}

/// Fields that can be updated on a task.
///
/// `None` leaves the field unchanged. For the nullable fields the inner
/// `Option` is the new value, so `Some(None)` clears it.
#[derive(Debug, Default, Clone)]
pub struct TaskUpdate {
    /// New title (if Some).
    pub text: Option<String>,
    /// New description (if Some).
    pub description: Option<String>,
    /// New display time (if Some).
    pub time: Option<String>,
    /// New completion state (if Some).
    pub completed: Option<bool>,
    /// New priority (if Some).
    pub priority: Option<String>,
    /// New category (if Some).
    pub category: Option<String>,
    /// New due date (if Some).
    pub due_date: Option<Option<String>>,
    /// New attachment (if Some).
    pub attachment: Option<Option<String>>,
    /// Replacement notes (if Some).
    pub notes: Option<Vec<Note>>,
}

impl TaskUpdate {
    /// Check if any fields are set for update.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.description.is_none()
            && self.time.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.category.is_none()
            && self.due_date.is_none()
            && self.attachment.is_none()
            && self.notes.is_none()
    }
}
