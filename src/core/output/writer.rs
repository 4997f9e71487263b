//! Idempotent artifact writer
//!
//! Generated files are committed and checked by CI, so regenerating them
//! from unchanged inputs must not touch the disk at all.

use crate::domain::{ConfgenError, Result};
use std::fmt;
use std::fs;
use std::path::Path;

/// What [`write_if_changed`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created or overwritten
    Generated,
    /// The file already had exactly this content
    Skipped,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteOutcome::Generated => write!(f, "Generated"),
            WriteOutcome::Skipped => write!(f, "Skipping"),
        }
    }
}

/// Write `content` to `path` unless the file already holds exactly that
///
/// A file that cannot be read is treated as absent. Missing parent
/// directories are created.
///
/// # Arguments
///
/// * `label` - Human readable name of the artifact, used in status output
/// * `path` - Destination file
/// * `content` - Full intended file content
///
/// # Errors
///
/// Returns [`ConfgenError::Io`] if the directory or the file cannot be
/// written.
///
/// # Examples
///
/// ```
/// use relay_confgen::core::output::writer::{write_if_changed, WriteOutcome};
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("stdin.yaml");
///
/// assert_eq!(write_if_changed("stdin", &path, b"a: 1\n").unwrap(), WriteOutcome::Generated);
/// assert_eq!(write_if_changed("stdin", &path, b"a: 1\n").unwrap(), WriteOutcome::Skipped);
/// ```
pub fn write_if_changed(label: &str, path: &Path, content: &[u8]) -> Result<WriteOutcome> {
    if let Ok(existing) = fs::read(path) {
        if existing == content {
            println!("Skipping '{}' at: {}", label, path.display());
            tracing::debug!(label, path = %path.display(), "Artifact unchanged");
            return Ok(WriteOutcome::Skipped);
        }
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ConfgenError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    fs::write(path, content).map_err(|e| {
        ConfgenError::Io(format!("Failed to write {}: {}", path.display(), e))
    })?;

    println!("Generated '{}' at: {}", label, path.display());
    tracing::debug!(label, path = %path.display(), bytes = content.len(), "Artifact written");
    Ok(WriteOutcome::Generated)
}
