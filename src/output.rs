//! Shared output formatting for todo commands.

use serde::Serialize;

use crate::error::{Error, JsonError, Result};

pub const SCHEMA_VERSION: &str = "todo.v1";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
}

/// Print a successful result: a JSON envelope, or the human text if any.
pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: Option<&str>,
) -> Result<()> {
    if options.json {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            data: &'a T,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if let Some(human) = human {
        println!("{human}");
    }

    Ok(())
}

/// Report a failed command. JSON mode writes the envelope to stdout.
pub fn emit_error(command: &str, err: &Error, json: bool) -> Result<()> {
    if json {
        #[derive(Serialize)]
        struct Envelope<'a> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            error: JsonError,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            error: JsonError::from(err),
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    eprintln!("error: {err}");
    if let Some(hint) = error_hint(err) {
        eprintln!("hint: {hint}");
    }
    Ok(())
}

fn error_hint(err: &Error) -> Option<&'static str> {
    match err {
        Error::InvalidIndex { .. } => Some("run `todo --list` to see task numbers"),
        Error::EmptyInput => Some("pass the task text after the flag, e.g. `todo --add buy milk`"),
        Error::Parse { .. } => Some("fix or move the task file, then retry"),
        Error::InvalidConfig(_) => Some("fix .todo.toml then retry"),
        Error::Io(_) | Error::Json(_) => None,
    }
}
