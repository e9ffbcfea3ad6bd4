//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables: `GREETER_OUTPUT__TARGET=stderr`
//! 2. Config file: `--config FILE` (must exist) or the per-user default
//!    (optional)
//! 3. Built-in defaults
//!
//! CLI flags such as `--no-color` are merged at the call-site.

use std::path::PathBuf;

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Prefix of every environment override.
pub const ENV_PREFIX: &str = "GREETER";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where greetings go.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Standard stream for greetings when no file is set.
    pub target: OutputTarget,
    /// Append greetings to this file instead of a standard stream.
    pub file: Option<PathBuf>,
    /// Disable colours in error reports.
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
}

impl AppConfig {
    /// Load configuration from file, environment and defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; when it is
    /// `None` the default location is tried and may be absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with_env(config_file, Environment::with_prefix(ENV_PREFIX))
    }

    /// [`Self::load`] with an explicit environment source.
    fn load_with_env(config_file: Option<&PathBuf>, env: Environment) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        tracing::debug!(path = %path.display(), required, "Loading configuration");

        let settings = Config::builder()
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env.prefix_separator("_").separator("__"))
            .build()
            .with_context(|| format!("failed to load {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("invalid settings in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.greeter.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "greeter", "greeter")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".greeter.toml"))
    }
}
