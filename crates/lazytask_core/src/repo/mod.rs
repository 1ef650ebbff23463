//! Persistence layer for the task list.
//!
//! # Responsibility
//! - Define the whole-list repository contract.
//! - Keep the record format and file I/O out of the manager.
//!
//! # Invariants
//! - Only the pipe-delimited text format is read or written.
//! - Repository APIs return semantic errors (`NoSaveFile`, `CorruptFile`,
//!   `FailToSave`) rather than raw I/O errors.

pub mod record_codec;
pub mod task_file;
