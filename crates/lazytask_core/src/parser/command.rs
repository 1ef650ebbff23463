//! Task-creating command parser.
//!
//! # Responsibility
//! - Validate `todo` / `deadline` / `event` arguments and build a [`Task`].
//! - Map model validation failures onto command-specific error kinds.
//!
//! # Invariants
//! - The record delimiter `|` never reaches a task name.
//! - Task names are trimmed before construction.

use crate::error::ErrorKind;
use crate::model::task::{
    format_timestamp, parse_timestamp, Task, TaskValidationError, TIMESTAMP_HINT,
};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEADLINE_SEPARATOR: &str = " /by ";
const EVENT_FROM_SEPARATOR: &str = " /from ";

static EVENT_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" /from | /to ").expect("valid event separator regex"));

/// Parse-time failure for task-creating commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Keyword does not create a task.
    InvalidCommand { keyword: String },
    /// `todo` argument is blank.
    InvalidTodo,
    /// `deadline` argument is not `<name> /by <date>`.
    InvalidDeadline,
    /// `event` argument is not `<name> /from <date> /to <date>`.
    InvalidEvent,
    /// A date field does not parse.
    BadDateFormat { value: String },
    /// Event start is after its end.
    InvalidTimeRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCommand { .. } => ErrorKind::InvalidCommand,
            Self::InvalidTodo => ErrorKind::InvalidTodo,
            Self::InvalidDeadline => ErrorKind::InvalidDeadline,
            Self::InvalidEvent => ErrorKind::InvalidEvent,
            Self::BadDateFormat { .. } => ErrorKind::BadDateFormat,
            Self::InvalidTimeRange { .. } => ErrorKind::InvalidTimeRange,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCommand { keyword } => {
                write!(f, "`{keyword}` is not a task command")
            }
            Self::InvalidTodo => write!(f, "usage: todo <name>"),
            Self::InvalidDeadline => write!(f, "usage: deadline <name> /by <{TIMESTAMP_HINT}>"),
            Self::InvalidEvent => write!(
                f,
                "usage: event <name> /from <{TIMESTAMP_HINT}> /to <{TIMESTAMP_HINT}>"
            ),
            Self::BadDateFormat { value } => write!(
                f,
                "the date `{value}` is either invalid or not in the format {TIMESTAMP_HINT}"
            ),
            Self::InvalidTimeRange { start, end } => write!(
                f,
                "event start ({}) must not be after its end ({})",
                format_timestamp(start),
                format_timestamp(end)
            ),
        }
    }
}

impl Error for ParseError {}

/// Parses one task-creating command.
///
/// `keyword` is matched case-sensitively against `todo`, `deadline` and
/// `event`. `input` is the rest of the line after the keyword.
///
/// # Errors
/// - `InvalidCommand` for any other keyword.
/// - `InvalidTodo` / `InvalidDeadline` / `InvalidEvent` for malformed arguments.
/// - `BadDateFormat` when a date field does not parse.
/// - `InvalidTimeRange` when an event starts after it ends.
pub fn parse_task(keyword: &str, input: &str) -> Result<Task, ParseError> {
    let safe_input = input.replace('|', "");
    match keyword {
        "todo" => parse_todo(&safe_input),
        "deadline" => parse_deadline(&safe_input),
        "event" => parse_event(&safe_input),
        other => Err(ParseError::InvalidCommand {
            keyword: other.to_string(),
        }),
    }
}

fn parse_todo(input: &str) -> Result<Task, ParseError> {
    Task::todo(input.trim()).map_err(|err| map_validation(err, ParseError::InvalidTodo))
}

fn parse_deadline(input: &str) -> Result<Task, ParseError> {
    let parts = input.split(DEADLINE_SEPARATOR).collect::<Vec<_>>();
    let [name, due_at] = parts.as_slice() else {
        return Err(ParseError::InvalidDeadline);
    };
    if name.trim().is_empty() {
        return Err(ParseError::InvalidDeadline);
    }

    let due_at = parse_date(due_at)?;
    Task::deadline_at(name.trim(), due_at)
        .map_err(|err| map_validation(err, ParseError::InvalidDeadline))
}

fn parse_event(input: &str) -> Result<Task, ParseError> {
    let parts = EVENT_SEPARATOR_RE.split(input).collect::<Vec<_>>();
    let [name, start_at, end_at] = parts.as_slice() else {
        return Err(ParseError::InvalidEvent);
    };
    let from_first = EVENT_SEPARATOR_RE
        .find(input)
        .is_some_and(|m| m.as_str() == EVENT_FROM_SEPARATOR);
    if !from_first || name.trim().is_empty() {
        return Err(ParseError::InvalidEvent);
    }

    let start_at = parse_date(start_at)?;
    let end_at = parse_date(end_at)?;
    Task::event_between(name.trim(), start_at, end_at)
        .map_err(|err| map_validation(err, ParseError::InvalidEvent))
}

fn parse_date(value: &str) -> Result<NaiveDateTime, ParseError> {
    parse_timestamp(value).map_err(|_| ParseError::BadDateFormat {
        value: value.trim().to_string(),
    })
}

fn map_validation(err: TaskValidationError, on_empty_name: ParseError) -> ParseError {
    match err {
        TaskValidationError::EmptyName => on_empty_name,
        TaskValidationError::BadDateFormat { value } => ParseError::BadDateFormat { value },
        TaskValidationError::InvalidTimeRange { start, end } => {
            ParseError::InvalidTimeRange { start, end }
        }
    }
}
