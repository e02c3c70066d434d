// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cli::CliArgs;

/// Default poll interval when neither the CLI nor a config file supplies one.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Hard floor for the poll interval. Values below this are clamped with a
/// warning rather than rejected.
pub const MIN_POLL_INTERVAL_MS: u64 = 100;

/// Top-level configuration as read from a TOML file.
///
/// Every field is optional so a file can supply any subset; CLI flags win
/// over file values during [`resolve`]. Example:
///
/// ```toml
/// watch_path = "src"
/// commands = ["make", "./run_tests"]
/// extensions = ["c", "h"]
/// exclude = ["*test*"]
/// interval_ms = 500
/// recursive = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_path: Option<String>,

    /// Commands to run on changes, in order.
    pub commands: Vec<String>,

    /// Extension allow-list (without the leading dot). Empty = all.
    pub extensions: Vec<String>,

    /// Include glob patterns. Empty = all names included.
    pub include: Vec<String>,

    /// Exclude glob patterns; these win over includes.
    pub exclude: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiet: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_clear: Option<bool>,
}

impl ConfigFile {
    /// Rebuild a file representation from resolved settings, for
    /// `--save-config`.
    pub fn from_resolved(run: &RunConfig, filter: &FilterConfig) -> Self {
        Self {
            watch_path: Some(run.watch_root.to_string_lossy().into_owned()),
            commands: run.commands.clone(),
            extensions: filter.extensions.clone(),
            include: filter.include.clone(),
            exclude: filter.exclude.clone(),
            interval_ms: Some(run.interval.as_millis() as u64),
            recursive: Some(run.recursive),
            quiet: Some(run.display.quiet),
            verbose: Some(run.display.verbose),
            json: Some(run.display.json),
            no_clear: Some(run.display.no_clear),
        }
    }
}

/// Resolved run settings, immutable for the lifetime of the watch.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub watch_root: PathBuf,
    pub commands: Vec<String>,
    pub interval: Duration,
    pub recursive: bool,
    pub display: DisplayOptions,
}

/// How events are rendered; consumed by the reporter only.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    pub quiet: bool,
    pub verbose: bool,
    pub json: bool,
    pub no_clear: bool,
}

/// Resolved file-relevance settings, immutable for the lifetime of the
/// watch.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Lower-cased extensions without the leading dot. Empty = all allowed.
    pub extensions: Vec<String>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// Merge CLI arguments over an optional config file into the resolved
/// settings pair.
///
/// Scalar CLI values override file values; list-valued flags (`--exec`,
/// `--ext`, `--include`, `--exclude`) replace the file list entirely when
/// given at least once.
pub fn resolve(args: &CliArgs, file: Option<ConfigFile>) -> Result<(RunConfig, FilterConfig)> {
    let file = file.unwrap_or_default();

    let watch_path = args
        .watch
        .clone()
        .or(file.watch_path)
        .ok_or_else(|| anyhow!("a watch path is required (-w/--watch or `watch_path` in the config file)"))?;

    let commands = if args.exec.is_empty() {
        file.commands
    } else {
        args.exec.clone()
    };
    if commands.is_empty() {
        bail!("at least one command is required (-x/--exec or `commands` in the config file)");
    }

    let extensions = normalize_extensions(if args.ext.is_empty() {
        &file.extensions
    } else {
        &args.ext
    });
    let include = pick_list(&args.include, file.include);
    let exclude = pick_list(&args.exclude, file.exclude);

    let mut interval_ms = args
        .interval
        .or(file.interval_ms)
        .unwrap_or(DEFAULT_POLL_INTERVAL_MS);
    if interval_ms < MIN_POLL_INTERVAL_MS {
        warn!(
            requested_ms = interval_ms,
            floor_ms = MIN_POLL_INTERVAL_MS,
            "poll interval below the minimum; clamping"
        );
        interval_ms = MIN_POLL_INTERVAL_MS;
    }

    let run = RunConfig {
        watch_root: PathBuf::from(watch_path),
        commands,
        interval: Duration::from_millis(interval_ms),
        recursive: !args.no_recursive && file.recursive.unwrap_or(true),
        display: DisplayOptions {
            quiet: args.quiet || file.quiet.unwrap_or(false),
            verbose: args.verbose || file.verbose.unwrap_or(false),
            json: args.json || file.json.unwrap_or(false),
            no_clear: args.no_clear || file.no_clear.unwrap_or(false),
        },
    };

    let filter = FilterConfig {
        extensions,
        include,
        exclude,
    };

    Ok((run, filter))
}

fn pick_list(cli: &[String], file: Vec<String>) -> Vec<String> {
    if cli.is_empty() { file } else { cli.to_vec() }
}

/// Trim whitespace, strip a leading dot and lower-case each extension, so
/// `-e .C, h` and `-e c,h` mean the same thing.
fn normalize_extensions(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}
