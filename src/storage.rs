//! Storage layer for todo
//!
//! The whole task list lives in a single JSON document, by default
//! `todos.json` in the working directory:
//!
//! ```text
//! [
//!   {
//!     "task": "buy milk",
//!     "done": false,
//!     "created_at": "2024-05-01T10:30:00.123456Z",
//!     "completed_at": "0001-01-01T00:00:00Z",
//!     "updated_at": "0001-01-01T00:00:00Z"
//!   }
//! ]
//! ```
//!
//! The document is read and written wholesale; there is no partial update.

use std::fs;
use std::io;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::atomic;
use crate::error::{Error, Result};

/// Default name of the persisted task file
pub const DEFAULT_FILE: &str = "todos.json";

/// Read a JSON document, treating a missing or blank file, or a document
/// that is just `null`, as `T::default()`
pub fn read_json_or_default<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "file missing, starting empty");
            return Ok(T::default());
        }
        Err(err) => return Err(err.into()),
    };

    if content.iter().all(u8::is_ascii_whitespace) {
        tracing::debug!(path = %path.display(), "file empty, starting empty");
        return Ok(T::default());
    }

    let value: Option<T> = serde_json::from_slice(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(value.unwrap_or_default())
}

/// Write JSON data atomically (write to temp, then rename)
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');
    atomic::write_atomic_str(path, &json)
}
