//! Application layer errors.
//!
//! These errors represent failures in orchestration: the filesystem refused a
//! write, or an external command did not succeed. Value-level problems are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the scaffold workflow.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// At least one dependency installation command failed.
    ///
    /// Both installation commands have been attempted when this is raised.
    #[error("Dependency installation failed: {}", failed.join("; "))]
    DependencyInstallFailed { failed: Vec<String> },

    /// The project's format script failed.
    #[error("Formatting failed: {command}")]
    FormattingFailed { command: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::DependencyInstallFailed { .. } => vec![
                "Check the command output above for details".into(),
                "Ensure npm or yarn is installed and the registry is reachable".into(),
                "Files created so far were left on disk for inspection".into(),
            ],
            Self::FormattingFailed { .. } => vec![
                "Check the command output above for details".into(),
                "Dependencies were installed; re-run the format script manually".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::DependencyInstallFailed { .. } | Self::FormattingFailed { .. } => {
                ErrorCategory::ExternalCommand
            }
        }
    }
}
