use std::path::PathBuf;

use crate::domain::{
    package_manager::{DependencySet, PackageManager},
    project_name::ProjectName,
};

/// Everything the scaffold workflow needs, fixed at command start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub project_name: ProjectName,
    pub package_manager: PackageManager,
    pub dependencies: DependencySet,
}

impl ScaffoldRequest {
    pub fn new(project_name: ProjectName, package_manager: PackageManager) -> Self {
        Self {
            project_name,
            package_manager,
            dependencies: DependencySet::default(),
        }
    }

    pub fn with_dependencies(mut self, dependencies: DependencySet) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// `true` when the alternate package manager drives the run.
    pub fn uses_alternate_package_manager(&self) -> bool {
        self.package_manager.is_alternate()
    }

    /// Project root directory.
    pub fn root(&self) -> PathBuf {
        self.project_name.as_path().to_path_buf()
    }

    /// Directories created before any file is written, root first.
    pub fn directories(&self) -> [PathBuf; 3] {
        let root = self.root();
        [root.clone(), root.join("src"), root.join("public")]
    }
}
