// src/exec/mod.rs

//! Process execution layer.
//!
//! This module runs the configured commands through the platform shell via
//! `tokio::process::Command`, strictly in order and one at a time, and
//! reports every command's outcome through the [`crate::report::Reporter`].
//! It knows nothing about file changes; the engine invokes it once per poll
//! cycle that detected any.

pub mod runner;

pub use runner::{COMMAND_PACING, CommandResult, CommandRunner, ExecutionReport};
