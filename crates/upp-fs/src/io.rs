//! Lenient reads and atomic writes

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::{Error, NormalizedPath, Result};

/// Write `content` to `path` atomically.
///
/// The bytes go to a temporary file in the target's directory, which is
/// locked, synced and then renamed over `path`. A reader sees either the
/// old document or the new one. The temporary file is removed on every
/// failure. Parent directories are created as needed.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();
    let parent = match native_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|e| Error::io(&parent, e))?;

    // Dropping `temp` on any early return deletes it
    let mut temp = NamedTempFile::new_in(&parent).map_err(|e| Error::io(&parent, e))?;

    temp.as_file().lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;
    temp.write_all(content)
        .map_err(|e| Error::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| Error::io(temp.path(), e))?;
    temp.as_file().unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    temp.persist(&native_path)
        .map_err(|e| Error::io(&native_path, e.error))?;

    tracing::debug!(path = %path, bytes = content.len(), "Wrote file atomically");
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content, treating any failure as an empty document.
///
/// Callers use the empty string to tell "missing" apart from "malformed":
/// the former parses to nothing, the latter fails to parse.
pub fn read_text_or_empty(path: &NormalizedPath) -> String {
    match read_text(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %path, error = %e, "Read failed, treating as empty");
            String::new()
        }
    }
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
