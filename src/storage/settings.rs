//! Settings storage
//!
//! Loads the application configuration from `config.json` in the data
//! directory, then applies environment overrides.

use crate::storage::{get_data_dir, StorageError};
use crate::types::config::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the quote endpoint
pub const ENV_API_URL: &str = "QUOTEBOX_API_URL";
/// Overrides the data directory
pub const ENV_DATA_DIR: &str = "QUOTEBOX_DATA_DIR";
/// Overrides the request timeout (seconds)
pub const ENV_TIMEOUT_SECS: &str = "QUOTEBOX_TIMEOUT_SECS";

/// Get the config file path
fn get_config_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("config.json"))
}

/// Load configuration
///
/// Returns defaults if the file doesn't exist or is corrupted. Environment
/// overrides are applied either way.
pub fn load_config() -> AppConfig {
    let mut config = match get_config_path().and_then(|path| load_config_from(&path)) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        }
    };
    apply_overrides(&mut config, |name| std::env::var(name).ok());
    config.validate();
    config
}

/// Read a config file, defaults when it is absent
pub fn load_config_from(path: &Path) -> Result<AppConfig, StorageError> {
    if !path.exists() {
        tracing::info!("Config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    let json = fs::read_to_string(path)?;
    let mut config: AppConfig = serde_json::from_str(&json)?;
    config.validate();

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Apply overrides looked up through `lookup`
pub fn apply_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
        config.api_url = url;
    }
    if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
        config.data_dir = Some(PathBuf::from(dir));
    }
    if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
        match raw.trim().parse::<u64>() {
            Ok(secs) => config.request_timeout_secs = secs,
            Err(_) => tracing::warn!("Ignoring invalid {}={:?}", ENV_TIMEOUT_SECS, raw),
        }
    }
}

/// Directory the store should use for this configuration
pub fn resolve_data_dir(config: &AppConfig) -> Result<PathBuf, StorageError> {
    match &config.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => get_data_dir(),
    }
}
