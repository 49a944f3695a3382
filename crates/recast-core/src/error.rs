//! Error types for the recast conversion pipeline.
//!
//! Every failure carries the file path involved so the caller can report
//! exactly where a batch stopped.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for recast operations.
#[derive(Error, Debug)]
pub enum RecastError {
    /// A batch parameter was empty or named an unknown format
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A format token outside the supported set
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Opening, creating, reading, writing or walking failed
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The converted file was written but the original could not be removed.
    ///
    /// Both files are left on disk.
    #[error("Converted {original} to {converted} but failed to remove the original: {source}")]
    RemoveOriginal {
        original: PathBuf,
        converted: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a recognized image
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// The target codec rejected the pixel data
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RecastError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures detected before any filesystem access.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Convenience type alias for recast results.
pub type Result<T> = std::result::Result<T, RecastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = RecastError::io(
            "photos/a.gif",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("photos/a.gif"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_is_invalid_argument() {
        assert!(RecastError::InvalidArgument("no dir".into()).is_invalid_argument());
        assert!(!RecastError::UnsupportedFormat("bmp".into()).is_invalid_argument());
    }

    #[test]
    fn test_remove_original_names_both_files() {
        let err = RecastError::RemoveOriginal {
            original: PathBuf::from("a.gif"),
            converted: PathBuf::from("a.png"),
            source: std::io::Error::other("busy"),
        };
        let msg = err.to_string();
        assert!(msg.contains("a.gif"));
        assert!(msg.contains("a.png"));
    }
}
