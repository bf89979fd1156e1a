// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Poa.
//!
//! Pure values and command grammars. Nothing here touches the filesystem or
//! spawns a process; those concerns go through the ports defined in the
//! application layer.
//!
//! ## Rules
//!
//! - **No I/O**: no filesystem, network, or process calls
//! - **Immutable values**: every type is Clone + PartialEq and built once
//! - **Exact grammars**: package-manager argument lists live here so they
//!   can be pinned by unit tests
//!
// Public API - what the world sees
pub mod error;
pub mod invocation;
pub mod manifest;
pub mod package_manager;
pub mod project_name;
pub mod request;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use invocation::{Invocation, InvocationOutput};
pub use manifest::{ManifestDocument, PackageManifest, PackageScripts, PrettierConfig};
pub use package_manager::{
    DependencySet, PROBE_ARG, PackageManager, PackageManagerPreference, YARN_EXECUTABLE,
};
pub use project_name::{DEFAULT_PROJECT_NAME, ProjectName};
pub use request::ScaffoldRequest;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Request Tests
    // ========================================================================

    #[test]
    fn request_defaults_to_fixed_dependency_sets() {
        let request = ScaffoldRequest::new(ProjectName::from_arg(""), PackageManager::Yarn);

        assert_eq!(request.project_name.as_str(), DEFAULT_PROJECT_NAME);
        assert_eq!(request.dependencies.dev, ["react-scripts", "prettier"]);
        assert_eq!(request.dependencies.runtime, ["poa", "react", "react-dom"]);
        assert!(request.uses_alternate_package_manager());
    }

    #[test]
    fn request_dependencies_can_be_replaced() {
        let request = ScaffoldRequest::new(ProjectName::from_arg("x"), PackageManager::Npm)
            .with_dependencies(DependencySet::new(["a"], Vec::<String>::new()));

        assert_eq!(request.dependencies.dev, ["a"]);
        assert!(request.dependencies.runtime.is_empty());
    }

    // ========================================================================
    // Grammar Tests
    // ========================================================================

    #[test]
    fn every_invocation_targets_the_project() {
        let request = ScaffoldRequest::new(ProjectName::from_arg("shop"), PackageManager::Yarn);
        let pm = request.package_manager;
        let deps = &request.dependencies;

        for inv in [
            pm.dev_install(&request.project_name, &deps.dev),
            pm.install(&request.project_name, &deps.runtime),
        ] {
            assert!(inv.arguments().iter().any(|a| a == "shop"));
        }
        assert_eq!(
            pm.format(&request.project_name).working_dir(),
            Some(std::path::Path::new("shop"))
        );
    }
}
