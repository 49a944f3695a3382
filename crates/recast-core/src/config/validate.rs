//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.encode.jpeg_quality) {
            return Err(ConfigError::ValidationError(
                "encode.jpeg_quality must be between 1 and 100".into(),
            ));
        }
        if self.scan.max_depth == Some(0) {
            return Err(ConfigError::ValidationError(
                "scan.max_depth must be > 0".into(),
            ));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be \"pretty\" or \"json\", got {:?}",
                self.logging.format
            )));
        }
        Ok(())
    }
}
