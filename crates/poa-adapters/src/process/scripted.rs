//! Scripted process runner for testing.

use std::sync::{Arc, Mutex};

use poa_core::{
    application::ports::CommandRunner,
    domain::{Invocation, InvocationOutput},
};

type Matcher = Box<dyn Fn(&Invocation) -> bool + Send + Sync>;

/// Runner that never spawns anything.
///
/// Every invocation is recorded. By default all succeed; rules added with
/// [`Self::unavailable`] and [`Self::fail_when`] turn matching invocations
/// into failures. Clones share state.
#[derive(Clone, Default)]
pub struct ScriptedRunner {
    inner: Arc<Mutex<ScriptedInner>>,
}

#[derive(Default)]
struct ScriptedInner {
    calls: Vec<Invocation>,
    missing: Vec<String>,
    failures: Vec<Matcher>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Behave as if `program` is not on `PATH`.
    pub fn unavailable(self, program: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.missing.push(program.into());
        }
        self
    }

    /// Fail every invocation matching `matcher` with exit status 1.
    pub fn fail_when<F>(self, matcher: F) -> Self
    where
        F: Fn(&Invocation) -> bool + Send + Sync + 'static,
    {
        if let Ok(mut inner) = self.inner.lock() {
            inner.failures.push(Box::new(matcher));
        }
        self
    }

    /// Every invocation seen so far, in order.
    pub fn calls(&self) -> Vec<Invocation> {
        self.inner
            .lock()
            .map(|inner| inner.calls.clone())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for ScriptedRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedRunner")
            .field("calls", &self.calls().len())
            .finish_non_exhaustive()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> InvocationOutput {
        let Ok(mut inner) = self.inner.lock() else {
            return InvocationOutput::failure("scripted runner lock poisoned");
        };
        inner.calls.push(invocation.clone());

        if inner.missing.iter().any(|p| p == invocation.program()) {
            return InvocationOutput::failure("No such file or directory (os error 2)");
        }
        if inner.failures.iter().any(|matches| matches(invocation)) {
            return InvocationOutput {
                succeeded: false,
                stdout: format!("running {invocation}\n"),
                stderr: "scripted failure\n".into(),
                error: Some("exit status: 1".into()),
            };
        }
        InvocationOutput::success("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_succeeds_by_default_and_is_recorded() {
        let runner = ScriptedRunner::new();
        assert!(runner.run(&Invocation::new("npm").arg("install")).succeeded);
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn unavailable_program_fails_probe() {
        let runner = ScriptedRunner::new().unavailable("yarn");
        assert!(!runner.probe("yarn", "-v"));
        assert!(runner.probe("npm", "-v"));
    }

    #[test]
    fn matching_invocations_fail_with_output() {
        let runner = ScriptedRunner::new().fail_when(|inv| inv.arguments().contains(&"--save".into()));
        let out = runner.run(&Invocation::new("npm").args(["install", "react", "--save"]));
        assert!(!out.succeeded);
        assert_eq!(out.stderr, "scripted failure\n");
        assert_eq!(out.error.as_deref(), Some("exit status: 1"));
    }
}
