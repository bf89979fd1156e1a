//! Package-manager command grammars.
//!
//! Argument ordering here is the external contract with the `npm` and
//! `yarn` CLIs; tests pin every invocation exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{invocation::Invocation, project_name::ProjectName};

/// Executable probed to decide whether the alternate manager is available.
pub const YARN_EXECUTABLE: &str = "yarn";
/// Argument used for the availability probe.
pub const PROBE_ARG: &str = "-v";

const YARN_COMMON_ARGS: [&str; 2] = ["--no-progress", "--non-interactive"];

/// The package manager that drives installation and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    /// The alternate manager, used when it is found on `PATH`.
    Yarn,
}

impl PackageManager {
    /// Map the "alternate manager available" flag to a manager.
    pub fn from_alternate(use_alternate: bool) -> Self {
        if use_alternate { Self::Yarn } else { Self::Npm }
    }

    pub fn is_alternate(self) -> bool {
        self == Self::Yarn
    }

    pub fn executable(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => YARN_EXECUTABLE,
        }
    }

    /// Install development-only dependencies into `project`.
    pub fn dev_install(self, project: &ProjectName, deps: &[String]) -> Invocation {
        match self {
            Self::Npm => Invocation::new(self.executable())
                .arg("install")
                .args(deps.iter().cloned())
                .arg("--save-dev")
                .current_dir(project.as_path()),
            Self::Yarn => Invocation::new(self.executable())
                .arg("add")
                .arg(YARN_COMMON_ARGS[0])
                .arg("--dev")
                .arg(YARN_COMMON_ARGS[1])
                .args(["--cwd", project.as_str()])
                .args(deps.iter().cloned()),
        }
    }

    /// Install runtime dependencies into `project`.
    pub fn install(self, project: &ProjectName, deps: &[String]) -> Invocation {
        match self {
            Self::Npm => Invocation::new(self.executable())
                .arg("install")
                .args(deps.iter().cloned())
                .arg("--save")
                .current_dir(project.as_path()),
            Self::Yarn => Invocation::new(self.executable())
                .arg("add")
                .args(YARN_COMMON_ARGS)
                .args(["--cwd", project.as_str()])
                .args(deps.iter().cloned()),
        }
    }

    /// Run the project's `format` script.
    pub fn format(self, project: &ProjectName) -> Invocation {
        let inv = match self {
            Self::Npm => Invocation::new(self.executable()).args(["run", "format"]),
            Self::Yarn => Invocation::new(self.executable()).arg("format"),
        };
        inv.current_dir(project.as_path())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable())
    }
}

/// How the package manager is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManagerPreference {
    /// Probe for yarn, fall back to npm.
    #[default]
    Auto,
    Npm,
    Yarn,
}

impl PackageManagerPreference {
    /// The forced manager, or `None` when probing decides.
    pub fn forced(self) -> Option<PackageManager> {
        match self {
            Self::Auto => None,
            Self::Npm => Some(PackageManager::Npm),
            Self::Yarn => Some(PackageManager::Yarn),
        }
    }
}

impl fmt::Display for PackageManagerPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Npm => write!(f, "npm"),
            Self::Yarn => write!(f, "yarn"),
        }
    }
}

/// Dependencies installed into every new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySet {
    pub dev: Vec<String>,
    pub runtime: Vec<String>,
}

impl DependencySet {
    pub fn new<D, R>(dev: D, runtime: R) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            dev: dev.into_iter().map(Into::into).collect(),
            runtime: runtime.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for DependencySet {
    fn default() -> Self {
        Self::new(["react-scripts", "prettier"], ["poa", "react", "react-dom"])
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn name() -> ProjectName {
        ProjectName::from_arg("myapp")
    }

    fn args(inv: &Invocation) -> Vec<&str> {
        inv.arguments().iter().map(String::as_str).collect()
    }

    #[test]
    fn yarn_dev_install_marks_dev_once() {
        let deps = DependencySet::default();
        let inv = PackageManager::Yarn.dev_install(&name(), &deps.dev);
        assert_eq!(inv.program(), "yarn");
        assert_eq!(
            args(&inv),
            [
                "add",
                "--no-progress",
                "--dev",
                "--non-interactive",
                "--cwd",
                "myapp",
                "react-scripts",
                "prettier"
            ]
        );
        assert_eq!(inv.working_dir(), None);
    }

    #[test]
    fn yarn_runtime_install_has_no_dev_marker() {
        let deps = DependencySet::default();
        let inv = PackageManager::Yarn.install(&name(), &deps.runtime);
        assert_eq!(
            args(&inv),
            [
                "add",
                "--no-progress",
                "--non-interactive",
                "--cwd",
                "myapp",
                "poa",
                "react",
                "react-dom"
            ]
        );
    }

    #[test]
    fn npm_installs_run_inside_project() {
        let deps = DependencySet::default();
        let dev = PackageManager::Npm.dev_install(&name(), &deps.dev);
        let runtime = PackageManager::Npm.install(&name(), &deps.runtime);

        assert_eq!(dev.program(), "npm");
        assert_eq!(
            args(&dev),
            ["install", "react-scripts", "prettier", "--save-dev"]
        );
        assert_eq!(dev.working_dir(), Some(Path::new("myapp")));

        assert_eq!(
            args(&runtime),
            ["install", "poa", "react", "react-dom", "--save"]
        );
        assert_eq!(runtime.working_dir(), Some(Path::new("myapp")));
    }

    #[test]
    fn format_invocations() {
        let npm = PackageManager::Npm.format(&name());
        assert_eq!(npm.to_string(), "npm run format (in myapp)");

        let yarn = PackageManager::Yarn.format(&name());
        assert_eq!(yarn.to_string(), "yarn format (in myapp)");
    }

    #[test]
    fn alternate_flag_selects_yarn() {
        assert_eq!(PackageManager::from_alternate(true), PackageManager::Yarn);
        assert_eq!(PackageManager::from_alternate(false), PackageManager::Npm);
        assert!(PackageManager::Yarn.is_alternate());
    }

    #[test]
    fn preference_deserializes_lowercase() {
        fn parse(s: &str) -> Option<PackageManagerPreference> {
            serde_json::from_str(s).ok()
        }
        assert_eq!(parse(r#""auto""#), Some(PackageManagerPreference::Auto));
        assert_eq!(parse(r#""npm""#), Some(PackageManagerPreference::Npm));
        assert_eq!(parse(r#""yarn""#), Some(PackageManagerPreference::Yarn));
        assert_eq!(parse(r#""pnpm""#), None);
    }

    #[test]
    fn only_explicit_preferences_force_a_manager() {
        assert_eq!(PackageManagerPreference::Auto.forced(), None);
        assert_eq!(
            PackageManagerPreference::Yarn.forced(),
            Some(PackageManager::Yarn)
        );
    }
}
