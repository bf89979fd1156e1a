//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `poa-adapters` crate provides implementations; the CLI provides the
//! [`ProgressReporter`].

use std::fmt;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::{Invocation, InvocationOutput};
use crate::error::PoaResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `poa_adapters::filesystem::LocalFilesystem` (production)
/// - `poa_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// Succeeds when the directory already exists.
    fn create_dir_all(&self, path: &Path) -> PoaResult<()>;

    /// Write the whole content of a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> PoaResult<()>;
}

/// Port for running external commands to completion.
///
/// Implemented by:
/// - `poa_adapters::process::SystemCommandRunner` (production)
/// - `poa_adapters::process::ScriptedRunner` (testing)
///
/// Failures are data, not errors: a command that cannot be spawned or exits
/// non-zero comes back as an unsuccessful [`InvocationOutput`]. Output is
/// captured, never streamed, and there is no timeout.
#[cfg_attr(test, automock)]
pub trait CommandRunner: Send + Sync {
    /// Run the invocation and wait for it to exit.
    fn run(&self, invocation: &Invocation) -> InvocationOutput;

    /// `true` iff `program arg` starts and exits successfully.
    fn probe(&self, program: &str, arg: &str) -> bool {
        self.run(&Invocation::new(program).arg(arg)).succeeded
    }
}

/// A step of the scaffold workflow, as announced to a [`ProgressReporter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CreateDirectories,
    WriteManifest(&'static str),
    InstallDependencies,
    Format,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDirectories => write!(f, "Creating directories"),
            Self::WriteManifest(file) => write!(f, "Writing {file}"),
            Self::InstallDependencies => write!(f, "Dependencies installation"),
            Self::Format => write!(f, "Formatting codebase"),
        }
    }
}

/// Port for user-facing progress.
///
/// `stage_finished` is only called for stages that succeeded.
#[cfg_attr(test, automock)]
pub trait ProgressReporter {
    fn stage_started(&self, stage: Stage);

    fn stage_finished(&self, stage: Stage);

    /// An external command failed; `output` holds everything it captured.
    fn invocation_failed(&self, invocation: &Invocation, output: &InvocationOutput);
}

/// Reporter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn stage_started(&self, _stage: Stage) {}

    fn stage_finished(&self, _stage: Stage) {}

    fn invocation_failed(&self, _invocation: &Invocation, _output: &InvocationOutput) {}
}
