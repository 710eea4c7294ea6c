//! Capability-scoped artefact writes.
//!
//! Spreadsheet exports and word-cloud images are built as byte buffers in
//! memory and then written in one step through `cap-std`, creating parent
//! directories as needed. An existing file at the destination is
//! overwritten.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use thiserror::Error;

/// Error raised when an artefact cannot be written.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to write {kind} '{path}': {message}")]
pub struct ArtefactWriteError {
    /// Kind of artefact being written, for the error message.
    pub kind: String,
    /// Destination path.
    pub path: Utf8PathBuf,
    /// Underlying failure detail.
    pub message: String,
}

impl ArtefactWriteError {
    fn new(kind: &str, path: &Utf8Path, message: impl Into<String>) -> Self {
        Self {
            kind: kind.to_owned(),
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

/// Writes `bytes` to `path`, creating parent directories when needed.
///
/// `kind` names the artefact (for example "spreadsheet" or "word cloud")
/// and only appears in error messages.
///
/// # Errors
///
/// Returns [`ArtefactWriteError`] when the destination has no file name,
/// when a parent directory cannot be created or opened, or when the write
/// itself fails.
pub fn write_bytes(path: &Utf8Path, bytes: &[u8], kind: &str) -> Result<(), ArtefactWriteError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ArtefactWriteError::new(kind, path, "destination has no file name"))?;

    let target_dir = open_parent_dir(path, kind)?;

    let mut file = target_dir
        .create(file_name)
        .map_err(|error| ArtefactWriteError::new(kind, path, error.to_string()))?;
    file.write_all(bytes)
        .map_err(|error| ArtefactWriteError::new(kind, path, error.to_string()))?;
    file.flush()
        .map_err(|error| ArtefactWriteError::new(kind, path, error.to_string()))?;

    Ok(())
}

fn open_parent_dir(path: &Utf8Path, kind: &str) -> Result<Dir, ArtefactWriteError> {
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));

    let (base, rel_parent) = if parent.is_absolute() {
        let root = Dir::open_ambient_dir("/", ambient_authority())
            .map_err(|error| ArtefactWriteError::new(kind, path, error.to_string()))?;
        let rel = parent.strip_prefix("/").map_err(|_| {
            ArtefactWriteError::new(kind, path, "failed to normalise destination directory")
        })?;
        (root, rel)
    } else {
        let current = Dir::open_ambient_dir(".", ambient_authority())
            .map_err(|error| ArtefactWriteError::new(kind, path, error.to_string()))?;
        (current, parent)
    };

    if rel_parent.as_str().is_empty() || rel_parent == Utf8Path::new(".") {
        return Ok(base);
    }

    base.create_dir_all(rel_parent)
        .map_err(|error| ArtefactWriteError::new(kind, path, error.to_string()))?;
    base.open_dir(rel_parent)
        .map_err(|error| ArtefactWriteError::new(kind, path, error.to_string()))
}
