//! Task command implementations: add, complete, delete, update, list.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::input::read_description;
use crate::output::{emit_success, OutputOptions};
use crate::table::{self, TableOptions};
use crate::task::{Task, TaskStore};

pub struct AddOptions {
    pub text: Vec<String>,
    pub file: Option<PathBuf>,
    pub json: bool,
}

pub struct CompleteOptions {
    pub index: i64,
    pub file: Option<PathBuf>,
    pub json: bool,
}

pub struct DeleteOptions {
    pub index: i64,
    pub file: Option<PathBuf>,
    pub json: bool,
}

pub struct UpdateOptions {
    pub index: i64,
    pub text: Vec<String>,
    pub file: Option<PathBuf>,
    pub json: bool,
}

pub struct ListOptions {
    pub file: Option<PathBuf>,
    pub json: bool,
    pub no_color: bool,
}

struct TaskContext {
    store: TaskStore,
    config: Config,
}

#[derive(Serialize)]
struct TaskOutput<'a> {
    index: usize,
    #[serde(flatten)]
    task: &'a Task,
}

#[derive(Serialize)]
struct TaskListOutput<'a> {
    total: usize,
    pending: usize,
    tasks: Vec<TaskOutput<'a>>,
}

pub fn run_add(options: AddOptions) -> Result<()> {
    let mut ctx = load_context(options.file)?;
    let description = prompt_description(&options.text, options.json)?;

    ctx.store.add(description);
    ctx.store.store()?;

    let index = ctx.store.len();
    let task = ctx.store.get(index as i64)?;
    emit_success(
        OutputOptions { json: options.json },
        "add",
        &TaskOutput { index, task },
        None,
    )
}

pub fn run_complete(options: CompleteOptions) -> Result<()> {
    let mut ctx = load_context(options.file)?;

    ctx.store.complete(options.index)?;
    ctx.store.store()?;

    let task = ctx.store.get(options.index)?;
    emit_success(
        OutputOptions { json: options.json },
        "complete",
        &TaskOutput {
            index: options.index as usize,
            task,
        },
        None,
    )
}

pub fn run_delete(options: DeleteOptions) -> Result<()> {
    let mut ctx = load_context(options.file)?;

    let removed = ctx.store.delete(options.index)?;
    ctx.store.store()?;

    emit_success(
        OutputOptions { json: options.json },
        "delete",
        &TaskOutput {
            index: options.index as usize,
            task: &removed,
        },
        None,
    )
}

pub fn run_update(options: UpdateOptions) -> Result<()> {
    let mut ctx = load_context(options.file)?;

    // Reject a bad index before blocking on stdin
    ctx.store.validate_index(options.index)?;
    let description = prompt_description(&options.text, options.json)?;

    ctx.store.update(options.index, &description)?;
    ctx.store.store()?;

    let task = ctx.store.get(options.index)?;
    emit_success(
        OutputOptions { json: options.json },
        "update",
        &TaskOutput {
            index: options.index as usize,
            task,
        },
        None,
    )
}

pub fn run_list(options: ListOptions) -> Result<()> {
    let ctx = load_context(options.file)?;
    let tasks = ctx.store.tasks();

    let output = TaskListOutput {
        total: tasks.len(),
        pending: ctx.store.pending(),
        tasks: tasks
            .iter()
            .enumerate()
            .map(|(i, task)| TaskOutput { index: i + 1, task })
            .collect(),
    };

    let color = ctx.config.color && !options.no_color && io::stdout().is_terminal();
    let human = table::render(
        tasks,
        TableOptions {
            timestamp_format: &ctx.config.timestamp_format,
            color,
        },
    );

    emit_success(
        OutputOptions { json: options.json },
        "list",
        &output,
        Some(&human),
    )
}

fn load_context(file: Option<PathBuf>) -> Result<TaskContext> {
    let cwd = std::env::current_dir()?;
    let config = Config::load_from_dir(&cwd)?;
    let path = file.unwrap_or_else(|| config.task_file(&cwd));
    let store = TaskStore::open(path)?;
    Ok(TaskContext { store, config })
}

/// Read task text; the prompt goes to stderr in JSON mode to keep stdout parseable.
fn prompt_description(text: &[String], json: bool) -> Result<String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut prompt: Box<dyn Write> = if json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    read_description(text, &mut reader, &mut prompt)
}
