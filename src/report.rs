// src/report.rs

//! User-facing event rendering.
//!
//! The core hands the reporter structured events (change-sets and
//! per-command results); this module decides how they look. Three renderings
//! exist:
//!
//! - colored text (default), with `HH:MM:SS` timestamps
//! - JSON lines under `--json`, one object per event, flushed per line
//! - nothing under `--quiet` (JSON output is still emitted: quiet is for
//!   humans, machine consumers want every event)
//!
//! Diagnostics (skipped subtrees, clamped values) are not the reporter's
//! business; those go through `tracing` to stderr.

use std::io::{self, Write};

use chrono::Local;
use colored::Colorize;
use serde::Serialize;
use tracing::warn;

use crate::config::{DisplayOptions, FilterConfig, RunConfig};
use crate::watch::{ChangeEvent, ChangeKind};

/// Renders scan and execution events according to the display options.
#[derive(Debug, Clone)]
pub struct Reporter {
    display: DisplayOptions,
}

#[derive(Serialize)]
struct ChangeSetRecord {
    timestamp: String,
    kind: &'static str,
    changes: usize,
}

#[derive(Serialize)]
struct FileRecord<'a> {
    timestamp: String,
    kind: &'static str,
    path: &'a str,
}

#[derive(Serialize)]
struct CommandRecord<'a> {
    timestamp: String,
    command: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    exit_code: Option<i32>,
    status: &'static str,
}

impl Reporter {
    pub fn new(display: DisplayOptions) -> Self {
        Self { display }
    }

    /// Startup summary: what is watched, how, and with which commands.
    pub fn banner(&self, run: &RunConfig, filter: &FilterConfig) {
        if self.display.json || self.display.quiet {
            return;
        }

        let tag = "[pollrun]".cyan();
        println!("{tag} Watching: {}", run.watch_root.display().to_string().yellow());

        if !filter.extensions.is_empty() {
            let exts: Vec<String> = filter.extensions.iter().map(|e| format!(".{e}")).collect();
            println!("{tag} Extensions: {}", exts.join(", ").green());
        }
        if !filter.include.is_empty() {
            println!("{tag} Include: {}", filter.include.join(", ").green());
        }
        if !filter.exclude.is_empty() {
            println!("{tag} Exclude: {}", filter.exclude.join(", ").green());
        }

        println!("{tag} Commands: {}", run.commands.join(", ").magenta());
        println!("{tag} Poll interval: {}", format!("{}ms", run.interval.as_millis()).blue());
        println!("{tag} Press Ctrl+C to stop\n");
    }

    /// Reported once after the baseline scan has populated the snapshot.
    pub fn baseline_done(&self, tracked: usize) {
        if self.display.json || self.display.quiet || !self.display.verbose {
            return;
        }
        println!("{} Tracking {tracked} file(s)", "[pollrun]".cyan());
    }

    /// A non-empty change-set was detected this poll cycle.
    pub fn change_set(&self, changes: &[ChangeEvent]) {
        if self.display.json {
            if self.display.verbose {
                for event in changes {
                    self.emit_json(&FileRecord {
                        timestamp: timestamp(),
                        kind: kind_str(event.kind),
                        path: &event.path.to_string_lossy(),
                    });
                }
            }
            self.emit_json(&ChangeSetRecord {
                timestamp: timestamp(),
                kind: "changed",
                changes: changes.len(),
            });
            return;
        }

        if self.display.quiet {
            return;
        }

        if self.display.verbose {
            for event in changes {
                let label = match event.kind {
                    ChangeKind::Created => "Created:".green(),
                    ChangeKind::Modified => "Modified:".yellow(),
                    ChangeKind::Unchanged => continue,
                };
                println!("{} {label} {}", time_tag(), event.path.display());
            }
        }

        println!(
            "{} {}",
            time_tag(),
            format!("Changes detected in {} file(s)", changes.len()).yellow()
        );
    }

    /// Called right before the command sequence starts.
    pub fn run_starting(&self) {
        if !self.display.json && !self.display.no_clear {
            // ANSI clear + home.
            print!("\x1B[2J\x1B[1;1H");
            let _ = io::stdout().flush();
        }
    }

    pub fn command_started(&self, command: &str) {
        if self.display.json {
            self.emit_json(&CommandRecord {
                timestamp: timestamp(),
                command,
                exit_code: None,
                status: "executing",
            });
            return;
        }
        if !self.display.quiet {
            println!("{} {} {command}", time_tag(), "Executing:".magenta());
        }
    }

    pub fn command_finished(&self, command: &str, exit_code: i32, success: bool) {
        if self.display.json {
            self.emit_json(&CommandRecord {
                timestamp: timestamp(),
                command,
                exit_code: Some(exit_code),
                status: if success { "success" } else { "failed" },
            });
            return;
        }
        if self.display.quiet {
            return;
        }
        if success {
            println!("{} {}", time_tag(), "Command completed successfully".green());
        } else {
            println!(
                "{} {}",
                time_tag(),
                format!("Command failed with exit code {exit_code}").red()
            );
        }
    }

    /// Called after a full command sequence, before going back to polling.
    pub fn waiting(&self) {
        if !self.display.json && !self.display.quiet {
            println!("{} {}\n", time_tag(), "Waiting for changes...".blue());
        }
    }

    pub fn stopped(&self) {
        if !self.display.json && !self.display.quiet {
            println!("{} File watching stopped", "[pollrun]".cyan());
        }
    }

    fn emit_json<T: Serialize>(&self, record: &T) {
        match serde_json::to_string(record) {
            Ok(line) => {
                println!("{line}");
                let _ = io::stdout().flush();
            }
            Err(err) => warn!(error = %err, "could not serialize event record"),
        }
    }
}

fn kind_str(kind: ChangeKind) -> &'static str {
    match kind {
        ChangeKind::Created => "created",
        ChangeKind::Modified => "modified",
        ChangeKind::Unchanged => "unchanged",
    }
}

fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

fn time_tag() -> colored::ColoredString {
    format!("[{}]", timestamp()).cyan()
}
