//! File-based logging
//!
//! The terminal is owned by the TUI, so log output goes to a file in the app
//! config directory instead of stderr. `RUST_LOG` controls the filter as
//! usual.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::path::PathBuf;

/// Initialize file-based logging; returns the log file path
pub fn init() -> Result<PathBuf> {
    let path = coop_config::paths::log_path()?;
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file: {path:?}"))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();

    Ok(path)
}
