//! Pipe-delimited record codec.
//!
//! # Responsibility
//! - Convert one task to/from one line of the save file.
//!
//! # Invariants
//! - Encoded fields are joined by `" | "`: tag, completion flag, name, dates.
//! - Decoding rebuilds tasks through the validating model constructors, so a
//!   record can never yield a task that user input could not.
//! - Decoding returns a complete task or an error, never a partial value.

use crate::error::ErrorKind;
use crate::model::task::{format_timestamp, Task, TaskKind, TaskValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field separator written between record fields.
pub const FIELD_SEPARATOR: &str = " | ";

/// Decoding failure for one record line. Always classified `CorruptRecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Field count does not match the declared type.
    FieldCount {
        tag: String,
        expected: usize,
        actual: usize,
    },
    /// Type letter is not `T`, `D` or `E`.
    UnknownType(String),
    /// Completion flag is not `0` or `1`.
    InvalidCompletionFlag(String),
    /// Fields parsed but do not form a valid task.
    InvalidTask(TaskValidationError),
}

impl RecordError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::CorruptRecord
    }
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldCount {
                tag,
                expected,
                actual,
            } => write!(
                f,
                "record of type `{tag}` needs {expected} fields, found {actual}"
            ),
            Self::UnknownType(tag) => write!(f, "unknown record type `{tag}`"),
            Self::InvalidCompletionFlag(flag) => {
                write!(f, "invalid completion flag `{flag}`; expected 0|1")
            }
            Self::InvalidTask(err) => write!(f, "invalid task record: {err}"),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTask(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskValidationError> for RecordError {
    fn from(value: TaskValidationError) -> Self {
        Self::InvalidTask(value)
    }
}

/// Encodes one task as a single record line (without trailing newline).
pub fn encode(task: &Task) -> String {
    let mut fields = vec![
        task.kind().tag().to_string(),
        completion_flag(task.is_complete()).to_string(),
        task.name().to_string(),
    ];
    match task.kind() {
        TaskKind::Todo => {}
        TaskKind::Deadline { due_at } => fields.push(format_timestamp(due_at)),
        TaskKind::Event { start_at, end_at } => {
            fields.push(format_timestamp(start_at));
            fields.push(format_timestamp(end_at));
        }
    }
    fields.join(FIELD_SEPARATOR)
}

/// Decodes one record line.
///
/// Fields are split on `|` and trimmed, so both `T | 1 | name` and the compact
/// `T|1|name` spelling are accepted.
///
/// # Errors
/// - `UnknownType` for an unrecognized type letter.
/// - `FieldCount` when the number of fields is wrong for the type.
/// - `InvalidCompletionFlag` when the flag is not `0`/`1`.
/// - `InvalidTask` for unparseable dates, blank names or reversed events.
pub fn decode(line: &str) -> Result<Task, RecordError> {
    let fields = line.split('|').map(str::trim).collect::<Vec<_>>();
    let tag = fields[0];

    let expected = match tag {
        "T" => 3,
        "D" => 4,
        "E" => 5,
        other => return Err(RecordError::UnknownType(other.to_string())),
    };
    if fields.len() != expected {
        return Err(RecordError::FieldCount {
            tag: tag.to_string(),
            expected,
            actual: fields.len(),
        });
    }

    let complete = parse_completion_flag(fields[1])?;
    let name = fields[2];
    let mut task = match tag {
        "T" => Task::todo(name)?,
        "D" => Task::deadline(name, fields[3])?,
        _ => Task::event(name, fields[3], fields[4])?,
    };

    if complete {
        task.mark_complete();
    }
    Ok(task)
}

fn completion_flag(complete: bool) -> char {
    if complete {
        '1'
    } else {
        '0'
    }
}

fn parse_completion_flag(value: &str) -> Result<bool, RecordError> {
    match value {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(RecordError::InvalidCompletionFlag(other.to_string())),
    }
}
