//! The `recast convert` command.

use anyhow::Context;
use clap::Args;
use recast_core::{Config, Recaster};

/// Arguments for the `convert` command.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Directories to scan recursively
    #[arg(required = true)]
    pub dirs: Vec<String>,

    /// Format to look for (gif, jpeg, png)
    #[arg(short = 'b', long = "from", default_value = "jpeg")]
    pub from: String,

    /// Format to convert into (gif, jpeg, png)
    #[arg(short = 'a', long = "to", default_value = "png")]
    pub to: String,
}

/// Execute the convert command.
///
/// Directories are processed in order; the first failing one stops the run.
pub fn execute(args: ConvertArgs, config: &Config) -> anyhow::Result<()> {
    let recaster = Recaster::new(config);
    let mut total = 0;

    for dir in &args.dirs {
        let dir = shellexpand::tilde(dir).into_owned();
        let report = recaster
            .run_with(&dir, &args.from, &args.to, |record| println!("{record}"))
            .with_context(|| format!("Failed to convert {} images in {}", args.from, dir))?;
        total += report.len();
    }

    tracing::info!("Done: {} image(s) converted", total);
    Ok(())
}
