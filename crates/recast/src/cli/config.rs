//! The `recast config` command and the effective configuration it reports.
//!
//! `convert` tolerates a broken config file by falling back to defaults, so
//! `config show` reports the configuration that would actually be used and
//! where it came from, rather than failing on the same file.

use anyhow::Context;
use clap::{Args, Subcommand};
use recast_core::Config;
use std::fmt;
use std::path::{Path, PathBuf};

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the configuration recast would use, with its source
    Show,

    /// Show config file path and whether it exists
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Loaded from this file
    File(PathBuf),
    /// No file exists; built-in defaults
    Defaults,
    /// The file exists but could not be used; built-in defaults
    Fallback { path: PathBuf, reason: String },
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigOrigin::File(path) => write!(f, "loaded from {}", path.display()),
            ConfigOrigin::Defaults => write!(f, "built-in defaults (no config file)"),
            ConfigOrigin::Fallback { path, reason } => write!(
                f,
                "built-in defaults ({} could not be loaded: {})",
                path.display(),
                reason
            ),
        }
    }
}

/// A configuration together with its origin.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub config: Config,
    pub origin: ConfigOrigin,
}

impl EffectiveConfig {
    /// Load from the default location, never failing.
    pub fn load() -> Self {
        Self::load_from(&Config::default_path())
    }

    /// Load from `path`; a missing or invalid file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self {
                config: Config::default(),
                origin: ConfigOrigin::Defaults,
            };
        }
        match Config::load_from(path) {
            Ok(config) => Self {
                config,
                origin: ConfigOrigin::File(path.to_path_buf()),
            },
            Err(e) => Self {
                config: Config::default(),
                origin: ConfigOrigin::Fallback {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                },
            },
        }
    }

    /// Message for stderr when the config file was ignored.
    pub fn warning(&self) -> Option<String> {
        match &self.origin {
            ConfigOrigin::Fallback { path, reason } => Some(format!(
                "Warning: Failed to load config {}: {reason}\n  \
                 Using default configuration. Inspect it with `recast config show`.",
                path.display()
            )),
            _ => None,
        }
    }

    /// TOML for `config show`, headed by a comment naming the origin.
    pub fn render(&self) -> anyhow::Result<String> {
        let toml = self.config.to_toml()?;
        Ok(format!("# {}\n{}", self.origin, toml))
    }
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, effective: &EffectiveConfig) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => print!("{}", effective.render()?),

        ConfigCommand::Path => {
            let path = Config::default_path();
            let state = if path.exists() { "" } else { " (not created)" };
            println!("{}{}", path.display(), state);
        }

        ConfigCommand::Init { force } => {
            let path = Config::default_path();
            init_at(&path, force)?;
            tracing::info!("Config file created at: {}", path.display());
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Write a default config file at `path`, refusing to clobber one unless forced.
fn init_at(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at: {}\nUse --force to overwrite.",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let contents = format!(
        "# recast configuration. Every key is optional.\n{}",
        Config::default().to_toml()?
    );
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
