//! Atomic file replacement
//!
//! Writes go to a temporary file in the target's directory which is then
//! renamed over the target, so readers see either the old or the new content.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::Result;

/// Atomically write data to a file
///
/// Missing parent directories are created. This does NOT lock; concurrent
/// writers race and the last rename wins.
pub fn write_atomic(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    // Same directory as the target so the rename never crosses filesystems
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(data)?;

    // The temp file starts out owner-only; the target keeps its own mode
    let permissions = match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => new_file_permissions(),
    };
    if let Some(permissions) = permissions {
        temp.as_file().set_permissions(permissions)?;
    }
    temp.as_file().sync_all()?;

    temp.persist(path).map_err(|err| err.error)?;

    Ok(())
}

/// Mode for files that did not exist before, as `File::create` gives under
/// the usual umask.
#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

/// Atomically write string data to a file
pub fn write_atomic_str(path: impl AsRef<Path>, data: &str) -> Result<()> {
    write_atomic(path, data.as_bytes())
}
