//! Path utilities for determining data storage locations.
//!
//! By default everything lives in `~/.todo-store/`: the `SQLite` database
//! holding the task list and preferences, the YAML config file and the log
//! file. A config can point the data directory elsewhere.

use std::path::{Path, PathBuf};

/// The base directory name for todo-store data.
const DATA_DIR_NAME: &str = ".todo-store";

/// The database filename.
pub const DATABASE_FILENAME: &str = "todo-store.sqlite3";

/// The config filename.
pub const CONFIG_FILENAME: &str = "config.yaml";

/// The log filename.
pub const LOG_FILENAME: &str = "todo-store.log";

/// Get the default data directory.
///
/// Returns `~/.todo-store/` or `None` if the home directory cannot be
/// determined.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
}

/// Get the database path inside a data directory.
#[must_use]
pub fn database_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DATABASE_FILENAME)
}

/// Get the config file path inside a data directory.
#[must_use]
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILENAME)
}

/// Get the log file path inside a data directory.
#[must_use]
pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILENAME)
}
