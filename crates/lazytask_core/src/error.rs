//! Tracker-level error union and stable error classification.
//!
//! # Responsibility
//! - Collect layer-specific errors into one value carried by `CommandResult`.
//! - Expose a stable `ErrorKind` name for diagnostic rendering.
//!
//! # Invariants
//! - No error here ever terminates the process; all are surfaced as values.

use crate::parser::command::ParseError;
use crate::repo::record_codec::RecordError;
use crate::repo::task_file::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable classification of every user-visible failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCommand,
    InvalidTodo,
    InvalidDeadline,
    InvalidEvent,
    BadDateFormat,
    InvalidTimeRange,
    NoTaskFound,
    SearchResultEmpty,
    InvalidCompletion,
    FailToSave,
    NoSaveFile,
    CorruptFile,
    CorruptRecord,
    EmptyInput,
}

impl ErrorKind {
    /// Name shown in diagnostic mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCommand => "InvalidCommand",
            Self::InvalidTodo => "InvalidTodo",
            Self::InvalidDeadline => "InvalidDeadline",
            Self::InvalidEvent => "InvalidEvent",
            Self::BadDateFormat => "BadDateFormat",
            Self::InvalidTimeRange => "InvalidTimeRange",
            Self::NoTaskFound => "NoTaskFound",
            Self::SearchResultEmpty => "SearchResultEmpty",
            Self::InvalidCompletion => "InvalidCompletion",
            Self::FailToSave => "FailToSave",
            Self::NoSaveFile => "NoSaveFile",
            Self::CorruptFile => "CorruptFile",
            Self::CorruptRecord => "CorruptRecord",
            Self::EmptyInput => "EmptyInput",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure (or caveat) attached to a `CommandResult`.
#[derive(Debug)]
pub enum TrackerError {
    /// Command text could not be turned into a task.
    Parse(ParseError),
    /// Backing file could not be read or written.
    Storage(StorageError),
    /// Index is outside `1..=len`.
    NoTaskFound { index: usize, len: usize },
    /// Index argument is not a positive number.
    InvalidIndex { raw: String },
    /// `find` matched nothing.
    SearchResultEmpty { keyword: String },
    /// mark/unmark found the task already in the requested state.
    InvalidCompletion { complete: bool },
    /// Load recovered, but the listed 1-based line numbers were skipped.
    RecordsSkipped { lines: Vec<(usize, RecordError)> },
    /// Keyword is not part of the command surface.
    UnknownCommand { keyword: String },
    /// Command needs an argument that was not given.
    MissingArgument { command: String },
    /// User submitted nothing.
    EmptyInput,
}

impl TrackerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(err) => err.kind(),
            Self::Storage(err) => err.kind(),
            Self::NoTaskFound { .. } | Self::InvalidIndex { .. } => ErrorKind::NoTaskFound,
            Self::SearchResultEmpty { .. } => ErrorKind::SearchResultEmpty,
            Self::InvalidCompletion { .. } => ErrorKind::InvalidCompletion,
            Self::RecordsSkipped { .. } => ErrorKind::CorruptRecord,
            Self::UnknownCommand { .. } | Self::MissingArgument { .. } => {
                ErrorKind::InvalidCommand
            }
            Self::EmptyInput => ErrorKind::EmptyInput,
        }
    }
}

impl Display for TrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::NoTaskFound { index, len } => write!(
                f,
                "{index} is not a valid index in a task list of {len} task(s)"
            ),
            Self::InvalidIndex { raw } => write!(f, "`{raw}` is not a valid task number"),
            Self::SearchResultEmpty { keyword } => {
                write!(f, "no task name contains `{keyword}`")
            }
            Self::InvalidCompletion { complete } => {
                if *complete {
                    write!(f, "complete tasks can only be marked as incomplete")
                } else {
                    write!(f, "incomplete tasks can only be marked as complete")
                }
            }
            Self::RecordsSkipped { lines } => {
                let numbers = lines
                    .iter()
                    .map(|(line_no, _)| line_no.to_string())
                    .collect::<Vec<_>>();
                write!(f, "skipped corrupted line(s): {}", numbers.join(", "))
            }
            Self::UnknownCommand { keyword } => write!(f, "unknown command `{keyword}`"),
            Self::MissingArgument { command } => write!(f, "`{command}` needs an argument"),
            Self::EmptyInput => write!(f, "user input is empty"),
        }
    }
}

impl Error for TrackerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for TrackerError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<StorageError> for TrackerError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}
