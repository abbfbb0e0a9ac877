//! todo - task list library
//!
//! Core functionality for the todo CLI: an ordered list of tasks loaded from
//! and stored to a single JSON file.
//!
//! # Core Concepts
//!
//! - **Task**: a description, a done flag and creation/completion/update times
//! - **Task list**: tasks in insertion order; the 1-based position is the
//!   only identity, so deleting shifts later tasks down
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `.todo.toml`
//! - `error`: Error types and result aliases
//! - `task`: The task store and its operations
//! - `storage`: JSON file reading and writing
//! - `atomic`: Write-then-rename file replacement
//! - `timestamp`: On-disk timestamp encoding and display
//! - `input`: Task text from arguments or stdin
//! - `table`: Table rendering for `--list`
//! - `output`: JSON envelopes and error reporting

pub mod atomic;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod storage;
pub mod table;
pub mod task;
pub mod timestamp;

pub use error::{Error, Result};
pub use task::{Task, TaskStore};
