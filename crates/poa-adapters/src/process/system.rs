//! Process runner backed by `std::process`.

use std::process::{Command, Output};

use poa_core::{
    application::ports::CommandRunner,
    domain::{Invocation, InvocationOutput},
};
use tracing::{debug, instrument};

/// Production runner: spawns the program, waits for it, captures both
/// streams.
///
/// Stdin is closed for the child, so interactive prompts fail fast instead
/// of hanging on input. There is no timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip_all, fields(command = %invocation))]
    fn run(&self, invocation: &Invocation) -> InvocationOutput {
        let mut command = Command::new(resolve_program(invocation.program()));
        command.args(invocation.arguments());
        if let Some(dir) = invocation.working_dir() {
            command.current_dir(dir);
        }

        match command.output() {
            Ok(output) => {
                debug!(status = %output.status, "Command exited");
                from_output(output)
            }
            Err(e) => {
                debug!(error = %e, "Command could not be started");
                InvocationOutput::failure(e.to_string())
            }
        }
    }
}

fn from_output(output: Output) -> InvocationOutput {
    InvocationOutput {
        succeeded: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        error: (!output.status.success()).then(|| output.status.to_string()),
    }
}

/// npm and yarn ship as `.cmd` shims on Windows, which `CreateProcess` does
/// not find without the extension.
#[cfg(windows)]
fn resolve_program(program: &str) -> String {
    match program {
        "npm" | "yarn" => format!("{program}.cmd"),
        other => other.to_string(),
    }
}

#[cfg(not(windows))]
fn resolve_program(program: &str) -> String {
    program.to_string()
}
