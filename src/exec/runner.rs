// src/exec/runner.rs

use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, error};

use crate::report::Reporter;

/// Pause between successive commands, for output readability only.
pub const COMMAND_PACING: Duration = Duration::from_millis(100);

/// Result of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub command: String,
    pub exit_code: i32,
    pub success: bool,
}

/// Per-command results of one full execution pass, in configured order.
#[derive(Debug, Default)]
pub struct ExecutionReport {
    pub results: Vec<CommandResult>,
}

impl ExecutionReport {
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.success)
    }
}

/// Runs the configured command list, one command at a time.
///
/// Commands go through the platform shell and inherit stdio, so their
/// output lands on the terminal between the reporter's lines. A failing
/// command never aborts the rest of the list, and a command that cannot be
/// spawned at all is folded into a `-1, failed` result. There is no
/// timeout: a hanging command blocks the watch until it exits.
#[derive(Debug)]
pub struct CommandRunner {
    commands: Vec<String>,
    reporter: Reporter,
}

impl CommandRunner {
    pub fn new(commands: Vec<String>, reporter: Reporter) -> Self {
        Self { commands, reporter }
    }

    /// Execute every configured command once, in order.
    pub async fn run(&self) -> ExecutionReport {
        self.reporter.run_starting();

        let mut report = ExecutionReport {
            results: Vec::with_capacity(self.commands.len()),
        };

        for (index, command) in self.commands.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(COMMAND_PACING).await;
            }

            self.reporter.command_started(command);
            let result = self.execute_one(command).await;
            debug!(
                command = %result.command,
                exit_code = result.exit_code,
                success = result.success,
                "command finished"
            );
            self.reporter
                .command_finished(command, result.exit_code, result.success);
            report.results.push(result);
        }

        self.reporter.waiting();
        report
    }

    async fn execute_one(&self, command: &str) -> CommandResult {
        match shell_command(command).status().await {
            Ok(status) => CommandResult {
                command: command.to_string(),
                exit_code: status.code().unwrap_or(-1),
                success: status.success(),
            },
            Err(err) => {
                error!(command = %command, error = %err, "failed to spawn command");
                CommandResult {
                    command: command.to_string(),
                    exit_code: -1,
                    success: false,
                }
            }
        }
    }
}

/// Build a shell command appropriate for the platform.
fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    }
}
