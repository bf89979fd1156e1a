// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so they can travel inside reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Usage Errors
    // ========================================================================
    #[error("No project name argument was supplied")]
    MissingProjectArgument,

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    #[error("Failed to serialize {file}: {reason}")]
    ManifestSerialization { file: &'static str, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingProjectArgument => vec![
                "Pass the project name as the first argument".into(),
                "An empty string (\"\") selects the default name".into(),
                "Example: poa init my-app".into(),
            ],
            Self::ManifestSerialization { .. } => {
                vec!["This is a bug in poa, please report it".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingProjectArgument => ErrorCategory::Validation,
            Self::ManifestSerialization { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for domain errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
