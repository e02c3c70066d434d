// src/cli.rs

//! CLI argument parsing using `clap` (derive API).
//!
//! The CLI only collects raw values; merging with an optional config file
//! and applying defaults happens in [`crate::config`].

use clap::{Parser, ValueEnum};

/// Command-line arguments for `pollrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pollrun",
    version,
    about = "Poll a directory tree and run commands when files change.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory to watch for changes.
    #[arg(short = 'w', long = "watch", value_name = "PATH")]
    pub watch: Option<String>,

    /// Command to execute on changes. Repeatable; commands run in the
    /// order given.
    #[arg(short = 'x', long = "exec", value_name = "CMD")]
    pub exec: Vec<String>,

    /// File extensions to watch, comma-separated (e.g. `c,h,py`).
    ///
    /// Empty means every extension is watched.
    #[arg(short = 'e', long = "ext", value_name = "LIST", value_delimiter = ',')]
    pub ext: Vec<String>,

    /// Only watch files whose name matches this glob pattern. Repeatable.
    #[arg(long, value_name = "PATTERN")]
    pub include: Vec<String>,

    /// Ignore files whose name matches this glob pattern. Repeatable;
    /// excludes win over includes.
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Polling interval in milliseconds (default 1000, minimum 100).
    #[arg(short = 'i', long, value_name = "MS")]
    pub interval: Option<u64>,

    /// Path to a TOML config file. CLI flags override file values.
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<String>,

    /// Write the resolved configuration back to the `--config` path before
    /// watching starts.
    #[arg(long)]
    pub save_config: bool,

    /// Do not descend into subdirectories.
    #[arg(long)]
    pub no_recursive: bool,

    /// Do not clear the screen before running commands.
    #[arg(long)]
    pub no_clear: bool,

    /// Emit events as JSON lines instead of colored text.
    #[arg(long)]
    pub json: bool,

    /// Also report each created/modified file individually.
    #[arg(long)]
    pub verbose: bool,

    /// Suppress the banner and informational messages.
    #[arg(long)]
    pub quiet: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `POLLRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
