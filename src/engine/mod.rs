// src/engine/mod.rs

//! Orchestration engine for pollrun.
//!
//! This module ties together:
//! - the cancellation token set by the Ctrl-C listener (`cancel.rs`)
//! - the watch loop that drives scan → execute → sleep cycles
//!   (`runtime.rs`)

pub mod cancel;
pub mod runtime;

pub use cancel::{CancelToken, spawn_ctrl_c_listener};
pub use runtime::{PollOutcome, WatchLoop};
