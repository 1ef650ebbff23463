//! User command parsing.
//!
//! # Responsibility
//! - Turn a command keyword and its raw argument into a validated task.
//!
//! # Invariants
//! - Parsing is pure: no I/O, no logging, no shared state.

pub mod command;
