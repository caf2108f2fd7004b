//! Configuration and data directory paths
//!
//! Uses XDG directories via the `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/coop-storefront/`
//! - macOS: `~/Library/Application Support/coop-storefront/`
//! - Windows: `%APPDATA%\coop-storefront\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "coop-storefront";

/// Get the application config directory, creating it if necessary
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Path of the persisted cart snapshot
pub fn cart_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("cart.json"))
}

/// Path of the persisted auth token
pub fn token_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("token.json"))
}

/// Path of the app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Path of the application log file
pub fn log_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("storefront.log"))
}
