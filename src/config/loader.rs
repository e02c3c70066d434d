// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::model::ConfigFile;

/// Load a configuration file from the given path.
///
/// This only performs TOML deserialization; merging with CLI flags and
/// semantic validation happen in [`crate::config::resolve`] and
/// [`crate::config::validate_settings`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file at {path:?}"))?;

    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML config from {path:?}"))?;

    Ok(config)
}

/// Write a configuration file to the given path (`--save-config`).
pub fn save_to_path(path: impl AsRef<Path>, config: &ConfigFile) -> Result<()> {
    let path = path.as_ref();
    let contents = toml::to_string_pretty(config)
        .context("serializing configuration to TOML")?;

    fs::write(path, contents)
        .with_context(|| format!("writing config file at {path:?}"))?;

    Ok(())
}
