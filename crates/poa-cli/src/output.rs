//! Output management and formatting.

use std::cell::RefCell;
use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::debug;

use poa_core::application::ports::{ProgressReporter, Stage};
use poa_core::domain::{Invocation, InvocationOutput};

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
///
/// Also the [`ProgressReporter`] handed to the scaffold service: long
/// running stages get a spinner when stderr, where indicatif draws, is a
/// terminal.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    spinner_enabled: bool,
    term: Term,
    err_term: Term,
    spinner: RefCell<Option<ProgressBar>>,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            spinner_enabled: io::stderr().is_terminal(),
            term: Term::stdout(),
            err_term: Term::stderr(),
            spinner: RefCell::new(None),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    // ── Spinner ───────────────────────────────────────────────────────────

    fn start_spinner(&self, msg: String) {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        pb.set_style(style);
        pb.set_message(msg);
        pb.enable_steady_tick(Duration::from_millis(100));
        self.spinner.replace(Some(pb));
    }

    fn clear_spinner(&self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

/// Only these stages run external commands and are shown to the user.
fn is_visible(stage: Stage) -> bool {
    matches!(stage, Stage::InstallDependencies | Stage::Format)
}

/// Render a failed command with everything it captured.
pub fn failure_report(
    invocation: &Invocation,
    output: &InvocationOutput,
    no_color: bool,
) -> String {
    let title = if no_color {
        "Command failure".to_owned()
    } else {
        "Command failure".red().bold().to_string()
    };

    let mut out = format!("{title}\n  command: {invocation}\n");
    if let Some(error) = &output.error {
        out.push_str(&format!("  error: {error}\n"));
    }
    out.push_str(&format!("out:\n{}\n", output.stdout.trim_end()));
    out.push_str(&format!("err:\n{}", output.stderr.trim_end()));
    out
}

impl ProgressReporter for OutputManager {
    fn stage_started(&self, stage: Stage) {
        if !is_visible(stage) {
            debug!(%stage, "Stage started");
            return;
        }
        if self.quiet {
            return;
        }
        if self.spinner_enabled {
            self.start_spinner(stage.to_string());
        } else {
            let _ = self.print(&stage.to_string());
        }
    }

    fn stage_finished(&self, stage: Stage) {
        if !is_visible(stage) {
            debug!(%stage, "Stage finished");
            return;
        }
        self.clear_spinner();
        let _ = self.success(&format!("{stage} OK"));
    }

    fn invocation_failed(&self, invocation: &Invocation, output: &InvocationOutput) {
        self.clear_spinner();
        let _ = self
            .err_term
            .write_line(&failure_report(invocation, output, self.no_color));
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn spinner_follows_stderr_terminal() {
        let out = make_manager(false, true);
        assert_eq!(out.spinner_enabled, io::stderr().is_terminal());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(make_manager(false, false).supports_color());
        assert!(!make_manager(false, true).supports_color());
    }

    #[test]
    fn config_can_disable_color() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(!OutputManager::new(&args, &config).supports_color());
    }

    #[test]
    fn only_command_stages_are_visible() {
        assert!(is_visible(Stage::InstallDependencies));
        assert!(is_visible(Stage::Format));
        assert!(!is_visible(Stage::CreateDirectories));
        assert!(!is_visible(Stage::WriteManifest("package.json")));
    }

    #[test]
    fn failure_report_includes_captured_streams() {
        let invocation = Invocation::new("npm").arg("run").arg("format");
        let output = InvocationOutput::failure("exit status: 2")
            .with_stderr("prettier: not found\n");

        let report = failure_report(&invocation, &output, true);
        assert!(report.starts_with("Command failure\n"));
        assert!(report.contains("command: npm run format"));
        assert!(report.contains("error: exit status: 2"));
        assert!(report.contains("out:\n"));
        assert!(report.ends_with("err:\nprettier: not found"));
    }

    #[test]
    fn reporter_events_do_not_panic_without_tty() {
        let out = make_manager(false, true);
        out.stage_started(Stage::InstallDependencies);
        out.stage_finished(Stage::InstallDependencies);
        out.stage_started(Stage::CreateDirectories);
        out.stage_finished(Stage::CreateDirectories);
        out.invocation_failed(
            &Invocation::new("yarn").arg("format"),
            &InvocationOutput::failure("exit status: 1"),
        );
    }
}
