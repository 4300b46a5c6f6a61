//! Site structure validation.
//!
//! The HTML, CSS, and JS assets are maintained by hand; this module only
//! checks that they exist. It never creates or repairs them, and a missing
//! asset is a reported condition rather than an error.

use std::path::Path;

/// Required static assets, in report order.
pub const REQUIRED_FILES: &[&str] = &["index.html", "styles.css", "app.js"];

/// Outcome of a structure check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureReport {
    /// Names from [`REQUIRED_FILES`] that were not found, in list order.
    pub missing: Vec<&'static str>,
}

impl StructureReport {
    /// Returns `true` if every required file was present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Missing names joined for display, e.g. `"styles.css, app.js"`.
    #[must_use]
    pub fn missing_joined(&self) -> String {
        self.missing.join(", ")
    }
}

/// Checks that every required asset exists in `site_dir`.
///
/// Each filename is probed exactly once; the filesystem is never written.
#[must_use]
pub fn check(site_dir: &Path) -> StructureReport {
    let missing: Vec<&'static str> = REQUIRED_FILES
        .iter()
        .copied()
        .filter(|name| !site_dir.join(name).exists())
        .collect();

    if missing.is_empty() {
        tracing::debug!(dir = %site_dir.display(), "all required files present");
    } else {
        tracing::debug!(
            dir = %site_dir.display(),
            missing = ?missing,
            "required files missing"
        );
    }

    StructureReport { missing }
}

// ============================================================================
// Tests
// ============================================================================
