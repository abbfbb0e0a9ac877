//! Task store for todo.
//!
//! Tasks are kept as an ordered list; a task's 1-based position is its only
//! identity. Deleting a task shifts every later task down by one.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage;
use crate::timestamp;

/// One to-do item as persisted on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task")]
    pub description: String,
    #[serde(default)]
    pub done: bool,
    #[serde(with = "timestamp::required")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "timestamp::optional")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::optional")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            created_at: Utc::now(),
            completed_at: None,
            updated_at: None,
        }
    }
}

/// In-memory task list bound to the file it is loaded from and stored to.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store for `path` without touching the filesystem
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tasks: Vec::new(),
        }
    }

    /// Create a store for `path` and load whatever is already there
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task at a 1-based index
    pub fn get(&self, index: i64) -> Result<&Task> {
        let slot = self.slot(index)?;
        Ok(&self.tasks[slot])
    }

    /// Number of tasks not yet done
    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|task| !task.done).count()
    }

    /// Replace the in-memory list with the file contents.
    ///
    /// A missing or blank file yields an empty list.
    pub fn load(&mut self) -> Result<()> {
        self.tasks = storage::read_json_or_default(&self.path)?;
        tracing::debug!(path = %self.path.display(), count = self.tasks.len(), "loaded tasks");
        Ok(())
    }

    /// Write the whole list back, replacing the file atomically
    pub fn store(&self) -> Result<()> {
        storage::write_json(&self.path, &self.tasks)?;
        tracing::debug!(path = %self.path.display(), count = self.tasks.len(), "stored tasks");
        Ok(())
    }

    /// Append a new pending task. The caller validates the description.
    pub fn add(&mut self, description: impl Into<String>) {
        self.tasks.push(Task::new(description));
        tracing::debug!(index = self.tasks.len(), "added task");
    }

    pub fn complete(&mut self, index: i64) -> Result<()> {
        let slot = self.slot(index)?;
        let task = &mut self.tasks[slot];
        task.done = true;
        task.completed_at = Some(Utc::now());
        tracing::debug!(index, "completed task");
        Ok(())
    }

    /// Remove and return the task at `index`
    pub fn delete(&mut self, index: i64) -> Result<Task> {
        let slot = self.slot(index)?;
        let removed = self.tasks.remove(slot);
        tracing::debug!(index, remaining = self.tasks.len(), "deleted task");
        Ok(removed)
    }

    pub fn update(&mut self, index: i64, description: &str) -> Result<()> {
        let slot = self.slot(index)?;
        let description = description.trim();
        if description.is_empty() {
            return Err(Error::EmptyInput);
        }
        let task = &mut self.tasks[slot];
        task.description = description.to_string();
        task.updated_at = Some(Utc::now());
        tracing::debug!(index, "updated task");
        Ok(())
    }

    /// Check that `index` refers to an existing task.
    pub fn validate_index(&self, index: i64) -> Result<()> {
        self.slot(index).map(|_| ())
    }

    fn slot(&self, index: i64) -> Result<usize> {
        let len = self.tasks.len();
        usize::try_from(index)
            .ok()
            .filter(|&i| i >= 1 && i <= len)
            .map(|i| i - 1)
            .ok_or(Error::InvalidIndex { index, len })
    }
}
