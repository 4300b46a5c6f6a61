//! Error types for `sitegen`
//!
//! The error surface is deliberately small: JSON serialization and
//! filesystem writes are the only fatal failure classes. Missing site
//! assets are a reported condition, not an error.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `sitegen` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Serialization error (record could not be rendered as JSON)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (write failed, permission denied, target missing)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, unknown scenario name)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `sitegen` operations.
#[derive(Debug, Error)]
pub enum SiteGenError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An output file could not be written
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        /// Path of the file that could not be written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Invalid usage (bad scenario name, conflicting options)
    #[error("{0}")]
    Usage(String),
}

impl SiteGenError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Io(_) | Self::WriteFailed { .. } => ExitCode::IO_ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
        }
    }
}

/// Result type alias for `sitegen` operations.
pub type Result<T> = std::result::Result<T, SiteGenError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CONFIG_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: SiteGenError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_write_failed_exit_code() {
        let err = SiteGenError::WriteFailed {
            path: PathBuf::from("/tmp/site_config.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_write_failed_display_includes_path() {
        let err = SiteGenError::WriteFailed {
            path: PathBuf::from("out/test_scenarios.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("test_scenarios.json"), "got: {rendered}");
        assert!(rendered.contains("denied"), "got: {rendered}");
    }

    #[test]
    fn test_usage_error_exit_code() {
        let err = SiteGenError::Usage("unknown scenario".to_string());
        assert_eq!(err.exit_code(), ExitCode::USAGE_ERROR);
        assert_eq!(err.to_string(), "unknown scenario");
    }

    #[test]
    fn test_json_error_exit_code() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SiteGenError = json_err.into();
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
    }
}
