//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate parser and repository calls into user-facing operations.
//! - Keep the shell decoupled from parsing and storage details.

pub mod result;
pub mod task_manager;
