//! Task repository contract and flat-file implementation.
//!
//! # Responsibility
//! - Persist the full task list as one record per line.
//! - Recover as many tasks as possible from a partially corrupted file.
//!
//! # Invariants
//! - Saves rewrite the whole file; there is no append or patch path.
//! - Loads never create the file and never mutate caller state.
//! - A corrupted line is skipped and reported, never fatal to the load.

use crate::error::ErrorKind;
use crate::model::task::Task;
use crate::repo::record_codec::{decode, encode, RecordError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type StorageResult<T> = Result<T, StorageError>;

/// File-level persistence failure.
#[derive(Debug)]
pub enum StorageError {
    /// Save file does not exist yet.
    NoSaveFile(PathBuf),
    /// Save file exists but could not be read as UTF-8 text.
    CorruptFile { path: PathBuf, source: io::Error },
    /// Save file could not be written.
    FailToSave { path: PathBuf, source: io::Error },
}

impl StorageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoSaveFile(_) => ErrorKind::NoSaveFile,
            Self::CorruptFile { .. } => ErrorKind::CorruptFile,
            Self::FailToSave { .. } => ErrorKind::FailToSave,
        }
    }
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSaveFile(path) => write!(f, "no save file found at `{}`", path.display()),
            Self::CorruptFile { path, source } => {
                write!(f, "save file `{}` could not be read: {source}", path.display())
            }
            Self::FailToSave { path, source } => {
                write!(f, "save file `{}` could not be written: {source}", path.display())
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoSaveFile(_) => None,
            Self::CorruptFile { source, .. } => Some(source),
            Self::FailToSave { source, .. } => Some(source),
        }
    }
}

/// Tasks recovered from storage plus the lines that had to be skipped.
#[derive(Debug, Default)]
pub struct LoadedTasks {
    /// Decoded tasks in file order.
    pub tasks: Vec<Task>,
    /// `(1-based line number, reason)` for every skipped line.
    pub skipped: Vec<(usize, RecordError)>,
}

/// Repository interface for whole-list task persistence.
pub trait TaskRepository {
    fn save_all(&self, tasks: &[Task]) -> StorageResult<()>;
    fn load_all(&self) -> StorageResult<LoadedTasks>;
}

/// Flat-file task repository using the pipe-delimited record format.
#[derive(Debug, Clone)]
pub struct FileTaskRepository {
    path: PathBuf,
}

impl FileTaskRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskRepository for FileTaskRepository {
    /// Overwrites the save file with one record line per task.
    fn save_all(&self, tasks: &[Task]) -> StorageResult<()> {
        let started_at = Instant::now();
        let content = encode_all(tasks);

        match std::fs::write(&self.path, content) {
            Ok(()) => {
                info!(
                    "event=task_file_save module=repo status=ok count={} duration_ms={}",
                    tasks.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=task_file_save module=repo status=error duration_ms={} error_code=write_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(StorageError::FailToSave {
                    path: self.path.clone(),
                    source: err,
                })
            }
        }
    }

    /// Reads the save file and decodes every non-blank line independently.
    fn load_all(&self) -> StorageResult<LoadedTasks> {
        let started_at = Instant::now();
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("event=task_file_load module=repo status=missing");
                return Err(StorageError::NoSaveFile(self.path.clone()));
            }
            Err(err) => {
                error!(
                    "event=task_file_load module=repo status=error duration_ms={} error_code=read_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(StorageError::CorruptFile {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        let loaded = decode_all(&content);
        for (line_no, err) in &loaded.skipped {
            warn!(
                "event=task_file_load module=repo status=skip line={} error={}",
                line_no, err
            );
        }
        info!(
            "event=task_file_load module=repo status=ok count={} skipped={} duration_ms={}",
            loaded.tasks.len(),
            loaded.skipped.len(),
            started_at.elapsed().as_millis()
        );
        Ok(loaded)
    }
}

/// Encodes tasks into save-file content, one `\n`-terminated line each.
pub fn encode_all(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(|task| format!("{}\n", encode(task)))
        .collect()
}

/// Decodes save-file content, skipping blank lines and collecting failures.
pub fn decode_all(content: &str) -> LoadedTasks {
    let mut loaded = LoadedTasks::default();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match decode(line) {
            Ok(task) => loaded.tasks.push(task),
            Err(err) => loaded.skipped.push((index + 1, err)),
        }
    }
    loaded
}
