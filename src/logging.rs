//! File logging backend for the `log` facade.
//!
//! Library code logs through `log::{debug, warn, error}`. Applications that
//! want those records on disk call [`init`] once at startup; records are
//! appended to `todo-store.log` in the data directory as
//! `[timestamp] LEVEL target: message` lines.

use crate::error::{Error, Result};
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Maximum log file size before rotation (1MB).
const MAX_LOG_SIZE: u64 = 1_048_576;

/// The open log file and how many bytes it holds.
#[derive(Debug)]
struct LogFile {
    file: File,
    size: u64,
}

/// A `log` backend appending to a single file.
///
/// When the file would grow past its size limit it is moved aside to
/// `<name>.log.old` (replacing any earlier backup) and a fresh file is
/// started, both at open time and while logging.
#[derive(Debug)]
pub struct FileLogger {
    path: PathBuf,
    level: LevelFilter,
    max_size: u64,
    file: Mutex<LogFile>,
}

fn backup_path(path: &Path) -> PathBuf {
    path.with_extension("log.old")
}

fn open_append(path: &Path) -> std::io::Result<LogFile> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let size = file.metadata()?.len();
    Ok(LogFile { file, size })
}

impl FileLogger {
    /// Open (or create) the log file at `path`.
    ///
    /// A file larger than 1MB is first moved aside to `<name>.log.old`.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be created.
    pub fn open(path: &Path, level: LevelFilter) -> Result<Self> {
        Self::open_with_max_size(path, level, MAX_LOG_SIZE)
    }

    /// Like [`FileLogger::open`] with a custom rotation threshold in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be created.
    pub fn open_with_max_size(path: &Path, level: LevelFilter, max_size: u64) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        if let Ok(metadata) = fs::metadata(path) {
            if metadata.len() > max_size {
                let _ = fs::rename(path, backup_path(path));
            }
        }

        let file = open_append(path)?;
        Ok(Self { path: path.to_path_buf(), level, max_size, file: Mutex::new(file) })
    }

    /// Path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start a new file if appending `incoming` bytes would pass the limit.
    fn rotate_if_needed(&self, current: &mut LogFile, incoming: u64) {
        if current.size == 0 || current.size + incoming <= self.max_size {
            return;
        }
        let _ = current.file.flush();
        if fs::rename(&self.path, backup_path(&self.path)).is_err() {
            return;
        }
        if let Ok(fresh) = open_append(&self.path) {
            *current = fresh;
        }
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let ts = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let line =
            format!("[{ts}] {:<5} {}: {}\n", record.level(), record.target(), record.args());

        if let Ok(mut current) = self.file.lock() {
            let len = line.len() as u64;
            self.rotate_if_needed(&mut current, len);
            if current.file.write_all(line.as_bytes()).is_ok() {
                current.size += len;
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut current) = self.file.lock() {
            let _ = current.file.flush();
        }
    }
}

/// Install a [`FileLogger`] writing to `path` as the global logger.
///
/// Installing when a logger is already set leaves the existing one in place
/// and succeeds.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let logger = FileLogger::open(path, level).map_err(|e| Error::Logging(e.to_string()))?;

    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
        log::info!("todo-store {} logging to {}", crate::VERSION, path.display());
    }
    Ok(())
}
