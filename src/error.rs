//! Error types for todo
//!
//! Exit codes:
//! - 0: Success (including the "invalid command" fallback)
//! - 1: Any failed operation

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the todo CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Main error type for todo operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid index {index}: expected a value between 1 and {len}")]
    InvalidIndex { index: i64, len: usize },

    #[error("empty input is not allowed")]
    EmptyInput,

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }

    /// Stable machine-readable name for this error
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidIndex { .. } => "invalid_index",
            Error::EmptyInput => "empty_input",
            Error::Parse { .. } => "parse_error",
            Error::Io(_) => "io_error",
            Error::Json(_) => "json_error",
            Error::InvalidConfig(_) => "invalid_config",
        }
    }

    /// Structured details for JSON error output
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::InvalidIndex { index, len } => Some(serde_json::json!({
                "index": index,
                "len": len,
            })),
            Error::Parse { path, source } => Some(serde_json::json!({
                "path": path.to_string_lossy(),
                "line": source.line(),
                "column": source.column(),
            })),
            Error::InvalidConfig(message) => Some(serde_json::json!({
                "message": message,
            })),
            Error::EmptyInput | Error::Io(_) | Error::Json(_) => None,
        }
    }
}

/// Result type alias for todo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
            kind: err.kind(),
            details: err.details(),
        }
    }
}
