//! Gathering task text from trailing arguments or standard input.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};

pub const PROMPT: &str = "Enter task: ";

/// Resolve the description for add/update.
///
/// Trailing arguments win and are joined with single spaces. Without them,
/// `PROMPT` is written to `prompt` and one line is read from `reader`.
/// Text that is empty after trimming is rejected.
pub fn read_description<R, W>(args: &[String], reader: &mut R, prompt: &mut W) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    let text = if args.is_empty() {
        write!(prompt, "{PROMPT}")?;
        prompt.flush()?;
        let mut line = String::new();
        reader.read_line(&mut line)?;
        line
    } else {
        args.join(" ")
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(text.to_string())
}
