//! Scaffold Service - main application orchestrator.
//!
//! This service runs the whole `init` workflow, strictly in order:
//! 1. Create the project root with `src/` and `public/`
//! 2. Write `package.json`
//! 3. Install dev and runtime dependencies (both always attempted)
//! 4. Write `.prettierrc.json`
//! 5. Run the project's `format` script
//!
//! Any failure halts forward progress. Nothing is rolled back: partially
//! created projects stay on disk for inspection.

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem, ProgressReporter, Stage},
    },
    domain::{
        Invocation, InvocationOutput, ManifestDocument, PackageManifest, PrettierConfig,
        ScaffoldRequest,
    },
    error::PoaResult,
};

/// One external command and what came back from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRecord {
    pub invocation: Invocation,
    pub output: InvocationOutput,
}

impl InvocationRecord {
    pub fn succeeded(&self) -> bool {
        self.output.succeeded
    }
}

/// Result of the paired dependency installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub dev: InvocationRecord,
    pub runtime: InvocationRecord,
}

impl InstallReport {
    /// Aggregate success: both installations succeeded.
    pub fn succeeded(&self) -> bool {
        self.dev.succeeded() && self.runtime.succeeded()
    }

    /// Rendered commands that failed, dev first.
    pub fn failed_commands(&self) -> Vec<String> {
        [&self.dev, &self.runtime]
            .into_iter()
            .filter(|record| !record.succeeded())
            .map(|record| record.invocation.to_string())
            .collect()
    }
}

/// What a successful scaffold produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub files_written: Vec<PathBuf>,
    pub invocations: Vec<Invocation>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, runner: Box<dyn CommandRunner>) -> Self {
        Self { filesystem, runner }
    }

    /// The runner this service spawns commands through.
    pub fn runner(&self) -> &dyn CommandRunner {
        self.runner.as_ref()
    }

    /// Scaffold a new project.
    #[instrument(
        skip_all,
        fields(
            project = %request.project_name,
            package_manager = %request.package_manager
        )
    )]
    pub fn scaffold(
        &self,
        request: &ScaffoldRequest,
        reporter: &dyn ProgressReporter,
    ) -> PoaResult<ScaffoldReport> {
        info!("Scaffolding project");

        let mut report = ScaffoldReport {
            root: request.root(),
            files_written: Vec::new(),
            invocations: Vec::new(),
        };

        // 1. Directories
        reporter.stage_started(Stage::CreateDirectories);
        self.initialize_directories(request)?;
        reporter.stage_finished(Stage::CreateDirectories);

        // 2. package.json
        let manifest = PackageManifest::for_project(&request.project_name);
        report
            .files_written
            .push(self.write_manifest_reported(request, &manifest, reporter)?);

        // 3. Dependencies
        reporter.stage_started(Stage::InstallDependencies);
        let install = self.install_dependencies(request, reporter);
        report.invocations.push(install.dev.invocation.clone());
        report.invocations.push(install.runtime.invocation.clone());
        if !install.succeeded() {
            warn!(failed = ?install.failed_commands(), "Dependency installation failed");
            return Err(ApplicationError::DependencyInstallFailed {
                failed: install.failed_commands(),
            }
            .into());
        }
        reporter.stage_finished(Stage::InstallDependencies);

        // 4. .prettierrc.json
        report.files_written.push(self.write_manifest_reported(
            request,
            &PrettierConfig::default(),
            reporter,
        )?);

        // 5. Format
        reporter.stage_started(Stage::Format);
        let format = self.run_formatter(request, reporter);
        report.invocations.push(format.invocation.clone());
        if !format.succeeded() {
            warn!(command = %format.invocation, "Formatting failed");
            return Err(ApplicationError::FormattingFailed {
                command: format.invocation.to_string(),
            }
            .into());
        }
        reporter.stage_finished(Stage::Format);

        info!("Scaffold completed successfully");
        Ok(report)
    }

    /// Create `{name}`, `{name}/src` and `{name}/public`.
    ///
    /// Idempotent: existing directories are not an error.
    pub fn initialize_directories(&self, request: &ScaffoldRequest) -> PoaResult<()> {
        for dir in request.directories() {
            debug!(path = %dir.display(), "Creating directory");
            self.filesystem.create_dir_all(&dir)?;
        }
        Ok(())
    }

    /// Serialize `document` into the project root and return the file path.
    pub fn write_manifest<D: ManifestDocument>(
        &self,
        request: &ScaffoldRequest,
        document: &D,
    ) -> PoaResult<PathBuf> {
        let path = request.root().join(document.file_name());
        let json = document.to_json()?;
        self.filesystem.write_file(&path, &json)?;
        debug!(path = %path.display(), bytes = json.len(), "Manifest written");
        Ok(path)
    }

    /// Run both dependency installations.
    ///
    /// The runtime installation runs even when the dev installation failed;
    /// every failure is passed to `reporter` with its captured output.
    pub fn install_dependencies(
        &self,
        request: &ScaffoldRequest,
        reporter: &dyn ProgressReporter,
    ) -> InstallReport {
        let pm = request.package_manager;
        let name = &request.project_name;
        let deps = &request.dependencies;

        let dev = self.execute(pm.dev_install(name, &deps.dev), reporter);
        let runtime = self.execute(pm.install(name, &deps.runtime), reporter);

        InstallReport { dev, runtime }
    }

    /// Run the project's `format` script inside the project root.
    pub fn run_formatter(
        &self,
        request: &ScaffoldRequest,
        reporter: &dyn ProgressReporter,
    ) -> InvocationRecord {
        let invocation = request.package_manager.format(&request.project_name);
        self.execute(invocation, reporter)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_manifest_reported<D: ManifestDocument>(
        &self,
        request: &ScaffoldRequest,
        document: &D,
        reporter: &dyn ProgressReporter,
    ) -> PoaResult<PathBuf> {
        let stage = Stage::WriteManifest(document.file_name());
        reporter.stage_started(stage);
        let path = self.write_manifest(request, document)?;
        reporter.stage_finished(stage);
        Ok(path)
    }

    fn execute(&self, invocation: Invocation, reporter: &dyn ProgressReporter) -> InvocationRecord {
        debug!(command = %invocation, "Running command");
        let output = self.runner.run(&invocation);
        if output.succeeded {
            debug!(command = %invocation, "Command succeeded");
        } else {
            warn!(
                command = %invocation,
                error = output.error.as_deref().unwrap_or("unknown error"),
                "Command failed"
            );
            reporter.invocation_failed(&invocation, &output);
        }
        InvocationRecord { invocation, output }
    }
}
