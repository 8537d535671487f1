//! # Pure Data Module - Data Transfer Objects Only
//!
//! Configuration data structures and the TOML → DTO mapping. No validation
//! and no default resolution happen here: empty values are facts, and the
//! bootstrap layer decides what they mean.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Storage file path (empty when not configured).
    pub storage_path: PathBuf,

    /// Log directory (empty when not configured).
    pub log_dir: PathBuf,

    /// Whether logs are also written to a file.
    pub log_to_file: bool,

    /// Page round-trip timeout in milliseconds (0 when not configured).
    pub dispatch_timeout_ms: u64,
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    ///
    /// Missing sections and keys map to empty values; nothing is validated.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            storage_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            log_dir: PathBuf::from(
                toml_value
                    .get("logging")
                    .and_then(|l| l.get("dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            log_to_file: toml_value
                .get("logging")
                .and_then(|l| l.get("to_file"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            dispatch_timeout_ms: toml_value
                .get("dispatch")
                .and_then(|d| d.get("timeout_ms"))
                .and_then(|v| v.as_integer())
                .and_then(|v| u64::try_from(v).ok())
                .unwrap_or(0),
        })
    }
}
