//! Task domain model.
//!
//! # Responsibility
//! - Define the three task variants (todo, deadline, event) as one record.
//! - Own timestamp parsing/formatting for the `dd-MM-yyyy HH:mm` pattern.
//! - Provide the sort key used to order the task list.
//!
//! # Invariants
//! - `name` is never blank.
//! - `Event` always satisfies `start_at <= end_at`.
//! - Completion only changes through `mark_complete` / `mark_incomplete`.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// `chrono` pattern for the user-facing `dd-MM-yyyy HH:mm` format.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Human-readable form of [`TIMESTAMP_FORMAT`] used in messages.
pub const TIMESTAMP_HINT: &str = "dd-MM-yyyy HH:mm";

static TIMESTAMP_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}-\d{2}-\d{4} \d{2}:\d{2}$").expect("valid timestamp shape regex")
});

/// Validation error raised while constructing a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task name is empty after trimming.
    EmptyName,
    /// Date field does not match [`TIMESTAMP_FORMAT`].
    BadDateFormat { value: String },
    /// Event starts after it ends.
    InvalidTimeRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "task name cannot be empty"),
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

impl Error for TaskValidationError {}

/// Variant-specific payload of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Plain to-do with no date.
    Todo,
    /// Task that must be done by `due_at`.
    Deadline { due_at: NaiveDateTime },
    /// Task spanning `start_at..=end_at`.
    Event {
        start_at: NaiveDateTime,
        end_at: NaiveDateTime,
    },
}

impl TaskKind {
    /// Single-letter tag used in both display and persisted records.
    pub fn tag(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }

    /// Lowercase label used in log events.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Deadline { .. } => "deadline",
            Self::Event { .. } => "event",
        }
    }
}

/// One tracked task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: String,
    complete: bool,
    kind: TaskKind,
}

impl Task {
    /// Creates an incomplete to-do.
    pub fn todo(name: impl Into<String>) -> Result<Self, TaskValidationError> {
        Self::build(name.into(), TaskKind::Todo)
    }

    /// Creates an incomplete deadline from raw `dd-MM-yyyy HH:mm` text.
    pub fn deadline(name: impl Into<String>, due_at: &str) -> Result<Self, TaskValidationError> {
        let due_at = parse_timestamp(due_at)?;
        Self::deadline_at(name, due_at)
    }

    /// Creates an incomplete deadline from an already parsed timestamp.
    pub fn deadline_at(
        name: impl Into<String>,
        due_at: NaiveDateTime,
    ) -> Result<Self, TaskValidationError> {
        Self::build(name.into(), TaskKind::Deadline { due_at })
    }

    /// Creates an incomplete event from raw `dd-MM-yyyy HH:mm` text.
    pub fn event(
        name: impl Into<String>,
        start_at: &str,
        end_at: &str,
    ) -> Result<Self, TaskValidationError> {
        let start_at = parse_timestamp(start_at)?;
        let end_at = parse_timestamp(end_at)?;
        Self::event_between(name, start_at, end_at)
    }

    /// Creates an incomplete event from already parsed timestamps.
    ///
    /// # Errors
    /// - `InvalidTimeRange` when `start_at > end_at`.
    pub fn event_between(
        name: impl Into<String>,
        start_at: NaiveDateTime,
        end_at: NaiveDateTime,
    ) -> Result<Self, TaskValidationError> {
        if start_at > end_at {
            return Err(TaskValidationError::InvalidTimeRange {
                start: start_at,
                end: end_at,
            });
        }
        Self::build(name.into(), TaskKind::Event { start_at, end_at })
    }

    fn build(name: String, kind: TaskKind) -> Result<Self, TaskValidationError> {
        if name.trim().is_empty() {
            return Err(TaskValidationError::EmptyName);
        }
        Ok(Self {
            name,
            complete: false,
            kind,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Marks the task complete.
    ///
    /// Returns `true` only for the incomplete -> complete transition; an
    /// already complete task is left untouched and `false` is returned.
    pub fn mark_complete(&mut self) -> bool {
        if self.complete {
            return false;
        }
        self.complete = true;
        true
    }

    /// Marks the task incomplete. Symmetric to [`Task::mark_complete`].
    pub fn mark_incomplete(&mut self) -> bool {
        if !self.complete {
            return false;
        }
        self.complete = false;
        true
    }

    /// Ordering key for the task list. Todos share the minimum key.
    pub fn sort_key(&self) -> NaiveDateTime {
        match self.kind {
            TaskKind::Todo => NaiveDateTime::MIN,
            TaskKind::Deadline { due_at } => due_at,
            TaskKind::Event { start_at, .. } => start_at,
        }
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let marker = if self.complete { 'X' } else { ' ' };
        write!(f, "[{}][{marker}] {}", self.kind.tag(), self.name)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { due_at } => write!(f, " (by: {})", format_timestamp(due_at)),
            TaskKind::Event { start_at, end_at } => write!(
                f,
                " (from: {} to: {})",
                format_timestamp(start_at),
                format_timestamp(end_at)
            ),
        }
    }
}

/// Parses `dd-MM-yyyy HH:mm` text, ignoring surrounding whitespace.
///
/// Every field must be zero-padded to its full width; `1-1-2026 9:00` is
/// rejected even though chrono alone would accept it.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TaskValidationError> {
    let value = value.trim();
    let bad_format = || TaskValidationError::BadDateFormat {
        value: value.to_string(),
    };
    if !TIMESTAMP_SHAPE_RE.is_match(value) {
        return Err(bad_format());
    }
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| bad_format())
}

/// Formats a timestamp in the canonical `dd-MM-yyyy HH:mm` form.
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}
