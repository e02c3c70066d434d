// src/engine/runtime.rs

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::engine::cancel::CancelToken;
use crate::exec::{CommandRunner, ExecutionReport};
use crate::report::Reporter;
use crate::watch::{ScanMode, Scanner};

/// What one poll cycle did.
#[derive(Debug, Default)]
pub struct PollOutcome {
    /// Number of files that changed this cycle.
    pub changed: usize,
    /// Present iff the change-set was non-empty and commands ran.
    pub report: Option<ExecutionReport>,
}

/// The top-level control loop.
///
/// Lifecycle: one baseline scan to populate the snapshot (fatal on error),
/// then poll cycles of cancel-check, scan, execute-on-changes, sleep, until
/// the cancel token is set. However many files change in a cycle, the
/// command sequence runs exactly once for that cycle, and a cycle's
/// commands always finish before the next scan starts.
#[derive(Debug)]
pub struct WatchLoop {
    scanner: Scanner,
    runner: CommandRunner,
    interval: Duration,
    cancel: CancelToken,
    reporter: Reporter,
}

impl WatchLoop {
    pub fn new(
        scanner: Scanner,
        runner: CommandRunner,
        interval: Duration,
        cancel: CancelToken,
        reporter: Reporter,
    ) -> Self {
        Self {
            scanner,
            runner,
            interval,
            cancel,
            reporter,
        }
    }

    /// Run until cancelled. Returns an error only if the baseline scan
    /// fails; later scan failures are logged and retried next cycle.
    pub async fn run(mut self) -> Result<()> {
        info!("starting baseline scan");
        self.scanner
            .scan(ScanMode::Baseline)
            .context("baseline scan of watch root failed")?;
        info!(tracked = self.scanner.tracked_files(), "baseline established");
        self.reporter.baseline_done(self.scanner.tracked_files());

        while !self.cancel.is_cancelled() {
            if let Err(err) = self.poll_once().await {
                error!(error = %err, "scan failed; retrying next cycle");
            }
            tokio::time::sleep(self.interval).await;
        }

        info!("watch loop stopped");
        self.reporter.stopped();
        Ok(())
    }

    /// One poll cycle: scan, and if anything changed, report the change-set
    /// and run the command sequence once.
    pub async fn poll_once(&mut self) -> Result<PollOutcome> {
        let outcome = self.scanner.scan(ScanMode::Poll)?;
        if outcome.changes.is_empty() {
            return Ok(PollOutcome::default());
        }

        self.reporter.change_set(&outcome.changes);
        let report = self.runner.run().await;

        Ok(PollOutcome {
            changed: outcome.changes.len(),
            report: Some(report),
        })
    }
}
