//! Implementation of the `poa init` command.
//!
//! Responsibility: translate CLI arguments and config into a
//! `ScaffoldRequest`, call the core scaffold service, and display results.
//! No business logic lives here.

use tracing::{info, instrument};

use poa_adapters::{LocalFilesystem, SystemCommandRunner};
use poa_core::{
    application::{ScaffoldService, detect_package_manager},
    domain::{PackageManagerPreference, ProjectName, ScaffoldRequest},
};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `poa init` command.
///
/// 1. Resolve the project name (empty argument → configured default)
/// 2. Pick the package manager (flag, then config, then probe for yarn)
/// 3. Run the scaffold workflow with the output manager as reporter
/// 4. Print next steps
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let project_name = ProjectName::from_arg_or(&args.name, &config.defaults.project_name);
    let preference = resolve_preference(&args, &config);

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemCommandRunner::new()),
    );
    let package_manager = detect_package_manager(service.runner(), preference);
    info!(
        yarn = package_manager.is_alternate(),
        project = %project_name,
        "Starting init"
    );

    output.header(&format!("Creating '{project_name}'..."))?;

    let request = ScaffoldRequest::new(project_name.clone(), package_manager);
    let report = service.scaffold(&request, &output)?;

    info!(
        root = %report.root.display(),
        commands = report.invocations.len(),
        "Init completed"
    );

    output.success(&format!("Project '{project_name}' created!"))?;
    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {project_name}"))?;
        output.print(&format!("  {}", start_command(&request)))?;
    }

    Ok(())
}

/// The `--package-manager` flag wins over `defaults.package_manager`.
fn resolve_preference(args: &InitArgs, config: &AppConfig) -> PackageManagerPreference {
    args.package_manager
        .map(PackageManagerPreference::from)
        .unwrap_or(config.defaults.package_manager)
}

fn start_command(request: &ScaffoldRequest) -> &'static str {
    if request.uses_alternate_package_manager() {
        "yarn start"
    } else {
        "npm start"
    }
}
