//! Session bootstrap.
//!
//! A session owns the single task store and the preferences for one run of
//! the application. The presentation layer opens it once and borrows the
//! store for every operation.

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::logging;
use crate::paths;
use crate::persistence::TaskPersistence;
use crate::preferences::Preferences;
use crate::storage::SqliteStore;
use crate::tasks::TaskStore;
use std::path::{Path, PathBuf};

/// The store and preferences for one application session.
#[derive(Debug)]
pub struct Session {
    data_dir: PathBuf,
    /// The task store.
    pub tasks: TaskStore<SqliteStore>,
    /// User preferences.
    pub preferences: Preferences<SqliteStore>,
}

impl Session {
    /// Open a session using the config in the default data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be parsed, the home directory is
    /// unknown, or the database cannot be created.
    pub fn open_default() -> Result<Self> {
        Self::open(&StoreConfig::load()?)
    }

    /// Open a session for `config`.
    ///
    /// Starts file logging when the config asks for it, opens the `SQLite`
    /// database and loads the task list and preferences. A corrupt task list
    /// is not an error; the session starts empty.
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory can be determined, the log level
    /// is invalid, or the database cannot be created.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let data_dir = config
            .resolved_data_dir()
            .ok_or_else(|| Error::Validation("no data directory available".to_string()))?;

        if config.file_logging {
            logging::init(&paths::log_path(&data_dir), config.level_filter()?)?;
        }

        let backend = SqliteStore::new(paths::database_path(&data_dir))?;
        let preferences = Preferences::load(backend.clone());
        let tasks = TaskStore::new(TaskPersistence::new(backend));
        log::info!("Opened session in {} with {} task(s)", data_dir.display(), tasks.len());

        Ok(Self { data_dir, tasks, preferences })
    }

    /// The data directory backing this session.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
