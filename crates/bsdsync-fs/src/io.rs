//! Atomic and differential file writes

use std::fs::{self, OpenOptions};
use std::io::Write;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Outcome of a differential write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Destination was replaced with the new content.
    Changed,
    /// Destination already held exactly these bytes and was left untouched.
    Unchanged,
}

impl WriteOutcome {
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Read a file as UTF-8 text.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native = path.to_native();
    fs::read_to_string(&native).map_err(|e| Error::io(&native, e))
}

/// Write content to a file, replacing it atomically.
///
/// Uses write-to-temp-then-rename in the destination directory so readers
/// never observe a partial file; the temp file carries an advisory lock for
/// the duration of the write. Parent directories are created as needed.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native = path.to_native();

    if let Some(parent) = native.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file in the same directory, so the rename stays on one filesystem.
    let temp_name = format!(
        ".{}.{}.tmp",
        native
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: native.clone(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native.clone(),
    })?;

    fs::rename(&temp_path, &native).map_err(|e| Error::io(&native, e))
}

/// Overwrite the destination only when the new content differs.
///
/// Identical bytes leave the destination completely untouched, including its
/// modification time, so an incremental build system re-running on top of
/// the tree never sees a spurious change. A missing destination always
/// counts as changed.
pub fn write_if_changed(path: &NormalizedPath, content: &[u8]) -> Result<WriteOutcome> {
    match fs::read(path.to_native()) {
        Ok(existing) if existing == content => return Ok(WriteOutcome::Unchanged),
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(path.to_native(), e)),
    }
    write_atomic(path, content)?;
    Ok(WriteOutcome::Changed)
}
