//! # Configuration Loader
//!
//! Reads the optional TOML file into an [`AppConfig`] and resolves the
//! values it leaves empty against the platform data directory.
//!
//! Loading accepts whatever is in the file; resolution only fills gaps.

use std::path::{Path, PathBuf};

use anyhow::Context;
use fc_core::config::AppConfig;

const APP_DIR_NAME: &str = "formclip";
const STORAGE_FILE: &str = "storage.json";
const LOG_DIR: &str = "logs";
const DEFAULT_DISPATCH_TIMEOUT_MS: u64 = 5000;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Loads the file when given, otherwise starts from an empty config.
pub fn load_or_default(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match config_path {
        Some(path) => load_config(path),
        None => Ok(AppConfig::default()),
    }
}

/// Fully resolved runtime locations and limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub storage_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_to_file: bool,
    pub dispatch_timeout_ms: u64,
}

fn resolved_app_dir_name(profile: Option<&str>) -> String {
    match profile {
        Some(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Fills empty values from the platform data dir, namespaced by
/// `FORMCLIP_PROFILE`.
pub fn resolve(config: AppConfig) -> anyhow::Result<ResolvedConfig> {
    let profile = std::env::var("FORMCLIP_PROFILE").ok();
    resolve_in(config, dirs::data_local_dir(), profile.as_deref())
}

pub(crate) fn resolve_in(
    config: AppConfig,
    base_data_dir: Option<PathBuf>,
    profile: Option<&str>,
) -> anyhow::Result<ResolvedConfig> {
    let needs_base =
        config.storage_path.as_os_str().is_empty() || config.log_dir.as_os_str().is_empty();
    let app_root = if needs_base {
        let base = base_data_dir.context("Local data directory is unavailable")?;
        Some(base.join(resolved_app_dir_name(profile)))
    } else {
        None
    };

    let pick = |configured: PathBuf, fallback: &str| match &app_root {
        Some(root) if configured.as_os_str().is_empty() => root.join(fallback),
        _ => configured,
    };

    Ok(ResolvedConfig {
        storage_path: pick(config.storage_path, STORAGE_FILE),
        log_dir: pick(config.log_dir, LOG_DIR),
        log_to_file: config.log_to_file,
        dispatch_timeout_ms: match config.dispatch_timeout_ms {
            0 => DEFAULT_DISPATCH_TIMEOUT_MS,
            ms => ms,
        },
    })
}
