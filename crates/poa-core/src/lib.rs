//! Poa Core - ports and adapters implementation of `poa init`.
//!
//! This crate provides the domain and application layers for the Poa
//! application generator.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             poa-cli (CLI)               │
//! │   (argument parsing, config, output)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldService, detect_package_manager)│
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, CommandRunner, Reporter)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     poa-adapters (Infrastructure)       │
//! │ (LocalFilesystem, SystemCommandRunner)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use poa_core::prelude::*;
//!
//! # fn run(filesystem: Box<dyn Filesystem>, runner: Box<dyn CommandRunner>) -> PoaResult<()> {
//! let manager = detect_package_manager(runner.as_ref(), PackageManagerPreference::Auto);
//! let request = ScaffoldRequest::new(ProjectName::from_arg("my-app"), manager);
//!
//! let service = ScaffoldService::new(filesystem, runner);
//! service.scaffold(&request, &SilentReporter)?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldService, detect_package_manager,
        ports::{CommandRunner, Filesystem, ProgressReporter, SilentReporter, Stage},
    };
    pub use crate::domain::{
        DependencySet, Invocation, InvocationOutput, ManifestDocument, PackageManager,
        PackageManagerPreference, PackageManifest, PrettierConfig, ProjectName, ScaffoldRequest,
    };
    pub use crate::error::{PoaError, PoaResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
