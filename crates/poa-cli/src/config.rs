//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `POA_DEFAULTS__PACKAGE_MANAGER=npm`
//! 3. `--config FILE` if given, otherwise `./.poarc.{toml,json,yaml}`
//! 4. Global file: `<config dir>/poa/config.toml`
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use poa_core::domain::{DEFAULT_PROJECT_NAME, PackageManagerPreference};

/// Base name of the per-directory config file; the extension picks the format.
pub const LOCAL_CONFIG_NAME: &str = ".poarc";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Name used when `poa init ""` is run.
    pub project_name: String,
    pub package_manager: PackageManagerPreference,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.into(),
            package_manager: PackageManagerPreference::Auto,
        }
    }
}

impl AppConfig {
    /// Load configuration from the global file, the local `.poarc` (or the
    /// explicit `config_file`), and `POA_*` environment variables.
    ///
    /// Missing optional files are not an error; a missing explicit
    /// `config_file` is.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let local = match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Using config file");
                File::from(path.as_path()).required(true)
            }
            None => File::with_name(LOCAL_CONFIG_NAME).required(false),
        };
        Self::load_from(Self::config_path().as_deref(), local, "POA")
    }

    fn load_from(
        global: Option<&Path>,
        local: File<config::FileSourceFile, config::FileFormat>,
        env_prefix: &str,
    ) -> anyhow::Result<Self> {
        let mut builder = Config::builder();
        if let Some(global) = global {
            debug!(path = %global.display(), "Global config candidate");
            builder = builder.add_source(File::from(global).required(false));
        }

        let settings = builder
            .add_source(local)
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?;

        let cfg: Self = settings
            .try_deserialize()
            .context("Invalid configuration values")?;
        debug!(?cfg, "Configuration loaded");
        Ok(cfg)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "poa", "poa")
            .map(|d| d.config_dir().join("config.toml"))
    }
}
