//! Error types for `todo_store`.

/// Errors that can occur in the task store and its collaborators.
///
/// An unknown task id is never an error: operations referencing a missing
/// task are silent no-ops.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization or parsing error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML parsing error occurred.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A `SQLite` database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Input was rejected before any mutation took place.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The file logger could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
