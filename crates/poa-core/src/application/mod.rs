//! Application layer for Poa.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, package-manager detection)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Command grammars and
//! document shapes live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    InstallReport, InvocationRecord, ScaffoldReport, ScaffoldService, detect_package_manager,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, Filesystem, ProgressReporter, SilentReporter, Stage};

pub use error::ApplicationError;
