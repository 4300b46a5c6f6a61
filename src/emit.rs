//! JSON file emission.
//!
//! Both output files are regenerated wholesale on every run: the previous
//! file, if any, is overwritten without a merge or backup.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, SiteGenError};

/// Serializes `value` as pretty-printed JSON (2-space indentation) and
/// writes it to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`SiteGenError::Json`] if serialization fails, or
/// [`SiteGenError::WriteFailed`] carrying `path` if the write fails.
/// A failed write leaves whatever the filesystem left behind; there is no
/// partial-write cleanup.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;

    fs::write(path, &json).map_err(|source| SiteGenError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = json.len(), "wrote JSON file");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
