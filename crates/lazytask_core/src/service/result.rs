//! Uniform result envelope returned by every manager operation.

use crate::error::{ErrorKind, TrackerError};
use serde::Serialize;

/// Outcome of one user-facing operation.
///
/// `ok = true` with `error = Some(_)` means the operation went through with a
/// caveat (e.g. a load that skipped corrupted lines, or a mutation whose save
/// failed).
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Human-readable headline for the user.
    pub message: String,
    /// Operation payload (task display strings, list text, ...).
    pub data: String,
    /// Failure or caveat details.
    pub error: Option<TrackerError>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
            data: data.into(),
            error: None,
        }
    }

    pub fn failure(
        message: impl Into<String>,
        data: impl Into<String>,
        error: TrackerError,
    ) -> Self {
        Self {
            ok: false,
            message: message.into(),
            data: data.into(),
            error: Some(error),
        }
    }

    /// Attaches a caveat to a successful result.
    pub fn with_warning(mut self, error: TrackerError) -> Self {
        self.error = Some(error);
        self
    }

    /// Succeeded, but with a caveat attached.
    pub fn is_partial(&self) -> bool {
        self.ok && self.error.is_some()
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(TrackerError::kind)
    }

    /// Serializable snapshot for structured front ends.
    pub fn to_view(&self) -> ResultView {
        ResultView {
            ok: self.ok,
            message: self.message.clone(),
            data: self.data.clone(),
            error_kind: self.error_kind().map(|kind| kind.as_str()),
            error: self.error.as_ref().map(ToString::to_string),
        }
    }
}

/// Wire shape of a [`CommandResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub ok: bool,
    pub message: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
