//! Domain model for tracked tasks.
//!
//! # Responsibility
//! - Define the canonical task record shared by parser, codec and manager.
//!
//! # Invariants
//! - Tasks are only constructed through validating constructors.
//! - Variant-specific behaviour is a `match` over `TaskKind`.

pub mod task;
