//! Command-line interface for todo
//!
//! The surface is a flat set of flags rather than subcommands; exactly one
//! action runs per invocation.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;

mod task;

/// todo - a task list kept in a local JSON file
///
/// Add, list, complete, update and delete tasks. Tasks are referred to by
/// their 1-based position as shown by --list.
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Add a new task (text from trailing arguments or stdin)
    #[arg(long)]
    pub add: bool,

    /// Mark task N as completed
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub complete: Option<i64>,

    /// Delete task N
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub del: Option<i64>,

    /// List all tasks
    #[arg(long)]
    pub list: bool,

    /// Replace the text of task N (text from trailing arguments or stdin)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub update: Option<i64>,

    /// Task text for --add and --update
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Path to the task file (defaults to todos.json or the .todo.toml setting)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// The single action selected by an invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add,
    Complete(i64),
    Delete(i64),
    List,
    Update(i64),
    Invalid,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Complete(_) => "complete",
            Action::Delete(_) => "delete",
            Action::List => "list",
            Action::Update(_) => "update",
            Action::Invalid => "todo",
        }
    }
}

impl Cli {
    /// Pick the action; when several flags are given the first of
    /// add, complete, del, list, update wins.
    pub fn action(&self) -> Action {
        if self.add {
            Action::Add
        } else if let Some(index) = self.complete {
            Action::Complete(index)
        } else if let Some(index) = self.del {
            Action::Delete(index)
        } else if self.list {
            Action::List
        } else if let Some(index) = self.update {
            Action::Update(index)
        } else {
            Action::Invalid
        }
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let action = self.action();
        tracing::debug!(action = action.name(), "dispatching");

        match action {
            Action::Add => task::run_add(task::AddOptions {
                text: self.text,
                file: self.file,
                json: self.json,
            }),
            Action::Complete(index) => task::run_complete(task::CompleteOptions {
                index,
                file: self.file,
                json: self.json,
            }),
            Action::Delete(index) => task::run_delete(task::DeleteOptions {
                index,
                file: self.file,
                json: self.json,
            }),
            Action::List => task::run_list(task::ListOptions {
                file: self.file,
                json: self.json,
                no_color: self.no_color,
            }),
            Action::Update(index) => task::run_update(task::UpdateOptions {
                index,
                text: self.text,
                file: self.file,
                json: self.json,
            }),
            Action::Invalid => {
                println!("invalid command");
                Ok(())
            }
        }
    }
}
