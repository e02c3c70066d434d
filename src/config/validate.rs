// src/config/validate.rs

use std::fs;
use std::io;

use anyhow::{Result, bail};

use crate::config::model::RunConfig;
use crate::errors::ScanRootError;

/// Run semantic validation against resolved settings.
///
/// This checks:
/// - there is at least one non-blank command
/// - the watch root exists and is a directory
///
/// Glob patterns are validated when the filter is compiled, right after
/// this runs.
pub fn validate_settings(run: &RunConfig) -> Result<()> {
    ensure_commands(run)?;
    ensure_watch_root(run)?;
    Ok(())
}

fn ensure_commands(run: &RunConfig) -> Result<()> {
    if run.commands.is_empty() {
        bail!("at least one command is required");
    }
    for command in &run.commands {
        if command.trim().is_empty() {
            bail!("commands must not be blank");
        }
    }
    Ok(())
}

fn ensure_watch_root(run: &RunConfig) -> Result<()> {
    let root = &run.watch_root;
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ScanRootError::NotADirectory(root.clone()).into()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(ScanRootError::Missing(root.clone()).into())
        }
        Err(err) => Err(ScanRootError::Unreadable(root.clone(), err).into()),
    }
}
