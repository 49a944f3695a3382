//! Recast CLI - convert images between formats, detected by content.
//!
//! Recast walks directories, finds every image whose content is in the
//! source format (whatever its extension says), re-encodes it in the target
//! format and replaces the original file.
//!
//! # Usage
//!
//! ```bash
//! # Convert every JPEG under ./photos to PNG
//! recast convert ./photos
//!
//! # Convert GIF content to JPEG in two trees
//! recast convert --from gif --to jpeg ./a ./b
//!
//! # View configuration
//! recast config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Recast - convert images between formats, detected by content.
#[derive(Parser, Debug)]
#[command(name = "recast")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert images under one or more directories
    Convert(cli::convert::ConvertArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let effective = cli::config::EffectiveConfig::load();
    if let Some(warning) = effective.warning() {
        eprintln!("{warning}");
    }
    logging::init_from_config(&effective.config, cli.verbose, cli.json_logs);

    tracing::debug!("Recast v{}", recast_core::VERSION);

    match cli.command {
        Commands::Convert(args) => cli::convert::execute(args, &effective.config),
        Commands::Config(args) => cli::config::execute(args, &effective),
    }
}
