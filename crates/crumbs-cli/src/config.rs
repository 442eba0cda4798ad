//! Config file discovery for the CLI host.
//!
//! Lookup order: an explicit `--config` path, then
//! `<config_dir>/crumbs/config.toml`, then built-in defaults.

use anyhow::{Context, Result};
use crumbs_core::{ConfigError, CrumbsConfig, ErrorCode};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default per-user config location, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("crumbs/config.toml"))
}

/// Load the effective config.
///
/// An explicit path must exist; the per-user file is optional.
///
/// # Errors
///
/// Returns an error if an explicit path cannot be read, or if any config
/// file that is found fails to parse.
pub fn load_config(explicit: Option<&Path>) -> Result<CrumbsConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    match user_config_path() {
        Some(path) if path.exists() => read_config(&path),
        _ => {
            debug!("no config file found, using defaults");
            Ok(CrumbsConfig::default())
        }
    }
}

/// Code for a [`load_config`] failure: parse errors keep the core's
/// code, anything else means the file could not be read.
pub fn failure_code(err: &anyhow::Error) -> ErrorCode {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ConfigError>())
        .map_or(ErrorCode::ConfigReadError, ConfigError::code)
}

fn read_config(path: &Path) -> Result<CrumbsConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = CrumbsConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}
