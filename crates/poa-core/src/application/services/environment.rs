//! Environment probing: which package manager drives the run.

use tracing::{debug, info};

use crate::{
    application::ports::CommandRunner,
    domain::{PROBE_ARG, PackageManager, PackageManagerPreference, YARN_EXECUTABLE},
};

/// Pick the package manager for this run.
///
/// A forced preference is returned as-is without spawning anything.
/// Otherwise yarn is probed once; a missing executable and a failing one are
/// both treated as "unavailable".
pub fn detect_package_manager(
    runner: &dyn CommandRunner,
    preference: PackageManagerPreference,
) -> PackageManager {
    if let Some(forced) = preference.forced() {
        debug!(package_manager = %forced, "Package manager forced by configuration");
        return forced;
    }

    let available = runner.probe(YARN_EXECUTABLE, PROBE_ARG);
    let manager = PackageManager::from_alternate(available);
    info!(yarn_available = available, package_manager = %manager, "Package manager detected");
    manager
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockCommandRunner;

    #[test]
    fn auto_uses_yarn_when_probe_succeeds() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_probe()
            .withf(|program, arg| program == "yarn" && arg == "-v")
            .times(1)
            .return_const(true);

        assert_eq!(
            detect_package_manager(&runner, PackageManagerPreference::Auto),
            PackageManager::Yarn
        );
    }

    #[test]
    fn auto_falls_back_to_npm() {
        let mut runner = MockCommandRunner::new();
        runner.expect_probe().times(1).return_const(false);

        assert_eq!(
            detect_package_manager(&runner, PackageManagerPreference::Auto),
            PackageManager::Npm
        );
    }

    #[test]
    fn forced_preference_skips_probe() {
        let mut runner = MockCommandRunner::new();
        runner.expect_probe().never();
        runner.expect_run().never();

        assert_eq!(
            detect_package_manager(&runner, PackageManagerPreference::Npm),
            PackageManager::Npm
        );
        assert_eq!(
            detect_package_manager(&runner, PackageManagerPreference::Yarn),
            PackageManager::Yarn
        );
    }
}
