//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a project" or "pick a package manager".

pub mod environment;
pub mod scaffold_service;

pub use environment::detect_package_manager;
pub use scaffold_service::{InstallReport, InvocationRecord, ScaffoldReport, ScaffoldService};
