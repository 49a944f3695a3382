//! Conversion pipeline components.
//!
//! - **probe**: Detect a file's real format from its content
//! - **handle**: Decoded image plus the file it lives in
//! - **scan**: Find every image of one format under a directory
//! - **convert**: Re-encode one image and replace its file

pub mod convert;
pub mod handle;
pub mod probe;
pub mod scan;

// Re-exports for convenient access
pub use convert::{ConversionRecord, Converted, FormatConverter};
pub use handle::ImageHandle;
pub use probe::probe;
pub use scan::DirectoryScanner;
