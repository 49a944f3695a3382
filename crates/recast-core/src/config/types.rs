//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

/// Directory walk settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Follow symbolic links while walking
    pub follow_links: bool,

    /// Maximum walk depth below the root (unlimited when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

/// Encoder settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeConfig {
    /// JPEG quality, 1-100
    pub jpeg_quality: u8,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self { jpeg_quality: 75 }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
