// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod report;
pub mod watch;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::engine::{CancelToken, WatchLoop};
use crate::exec::CommandRunner;
use crate::report::Reporter;
use crate::watch::{FileFilter, Scanner};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI-over-file resolution
/// - the compiled file filter and the scanner
/// - the command runner
/// - Ctrl-C handling
/// - the watch loop
pub async fn run(args: CliArgs) -> Result<()> {
    let file_cfg = match &args.config {
        Some(path) => Some(config::load_from_path(path)?),
        None => None,
    };

    let (run_cfg, filter_cfg) = config::resolve(&args, file_cfg)?;
    config::validate_settings(&run_cfg)?;

    if args.save_config {
        let path = args
            .config
            .as_deref()
            .context("--save-config requires --config PATH")?;
        config::save_to_path(path, &ConfigFile::from_resolved(&run_cfg, &filter_cfg))?;
        info!(path, "configuration saved");
    }

    let reporter = Reporter::new(run_cfg.display);
    reporter.banner(&run_cfg, &filter_cfg);

    let filter = FileFilter::new(&filter_cfg)?;
    let scanner = Scanner::new(run_cfg.watch_root.clone(), filter, run_cfg.recursive);
    let runner = CommandRunner::new(run_cfg.commands.clone(), reporter.clone());

    let cancel = CancelToken::new();
    engine::spawn_ctrl_c_listener(cancel.clone());

    let watch_loop = WatchLoop::new(scanner, runner, run_cfg.interval, cancel, reporter);
    watch_loop.run().await
}
