//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use poa_core::domain::PackageManagerPreference;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "poa",
    bin_name = "poa",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "CLI for Poa application",
    long_about = "React-based Poa framework CLI. \
                  Creates new applications with their dependencies installed \
                  and the codebase formatted.",
    after_help = "EXAMPLES:\n\
        \x20 poa init my-app\n\
        \x20 poa init \"\"                       # uses the default name\n\
        \x20 poa init my-app --package-manager npm",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new application.
    #[command(
        about = "Create new application",
        after_help = "EXAMPLES:\n\
            \x20 poa init my-app\n\
            \x20 poa init my-app --package-manager yarn"
    )]
    Init(InitArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `poa init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project directory to create.  An empty string selects the default
    /// name.
    #[arg(
        value_name = "NAME",
        help = "Project name (empty string for the default)"
    )]
    pub name: String,

    /// Override package-manager detection.
    #[arg(
        short = 'p',
        long = "package-manager",
        value_name = "MANAGER",
        value_enum,
        help = "Package manager to use (default: detect yarn, fall back to npm)"
    )]
    pub package_manager: Option<PackageManagerArg>,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Package-manager choices accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PackageManagerArg {
    Auto,
    Npm,
    Yarn,
}

impl From<PackageManagerArg> for PackageManagerPreference {
    fn from(arg: PackageManagerArg) -> Self {
        match arg {
            PackageManagerArg::Auto => Self::Auto,
            PackageManagerArg::Npm => Self::Npm,
            PackageManagerArg::Yarn => Self::Yarn,
        }
    }
}

impl std::fmt::Display for PackageManagerArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        PackageManagerPreference::from(*self).fmt(f)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
