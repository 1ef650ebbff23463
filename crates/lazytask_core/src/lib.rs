//! Core domain logic for LazyTask.
//! This crate is the single source of truth for task invariants, the command
//! grammar and the save-file format.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod parser;
pub mod repo;
pub mod service;

pub use config::TrackerConfig;
pub use error::{ErrorKind, TrackerError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{
    format_timestamp, parse_timestamp, Task, TaskKind, TaskValidationError, TIMESTAMP_FORMAT,
};
pub use parser::command::{parse_task, ParseError};
pub use repo::record_codec::{decode, encode, RecordError};
pub use repo::task_file::{
    FileTaskRepository, LoadedTasks, StorageError, StorageResult, TaskRepository,
};
pub use service::result::{CommandResult, ResultView};
pub use service::task_manager::TaskManager;
