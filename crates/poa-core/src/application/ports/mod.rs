//! Application ports (traits) for external dependencies.
//!
//! Ports define interfaces that the application needs from the outside
//! world. Adapters in `poa-adapters` implement the driven ones.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation and whole-file writes
//!   - `CommandRunner`: Blocking external process execution
//!   - `ProgressReporter`: Stage and failure notifications for the user

pub mod output;

pub use output::{CommandRunner, Filesystem, ProgressReporter, SilentReporter, Stage};

#[cfg(test)]
pub use output::{MockCommandRunner, MockFilesystem, MockProgressReporter};
