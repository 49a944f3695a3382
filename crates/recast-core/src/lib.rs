//! Recast Core - content-sniffing image format conversion.
//!
//! Recast walks a directory tree, finds every image whose *content* is in a
//! source format (whatever its extension says), re-encodes it in a target
//! format and replaces the original file.
//!
//! # Architecture
//!
//! ```text
//! BatchRequest → Scan (probe each file) → Convert each handle → BatchReport
//! ```
//!
//! Files are processed one at a time. The first error stops the batch and
//! files converted before it stay converted.
//!
//! # Usage
//!
//! ```rust,no_run
//! use recast_core::{Config, Recaster};
//!
//! fn main() -> recast_core::Result<()> {
//!     let config = Config::load()?;
//!     let report = Recaster::new(&config).run("./photos", "gif", "png")?;
//!     for record in &report.converted {
//!         println!("{record}");
//!     }
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod batch;
pub mod config;
pub mod error;
pub mod format;
pub mod pipeline;

#[cfg(test)]
mod test_support;

use std::path::Path;

// Re-exports for convenient access
pub use batch::{BatchReport, BatchRequest, Recaster};
pub use config::Config;
pub use error::{ConfigError, RecastError, Result};
pub use format::Format;
pub use pipeline::{ConversionRecord, ImageHandle};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convert every `source` image under `dir` to `target` with default settings.
pub fn run(dir: impl AsRef<Path>, source: &str, target: &str) -> Result<BatchReport> {
    Recaster::new(&Config::default()).run(dir, source, target)
}
