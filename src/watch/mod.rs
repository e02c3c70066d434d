// src/watch/mod.rs

//! File scanning and change detection.
//!
//! This module is responsible for:
//! - Compiling the extension/include/exclude filter (`filter.rs`).
//! - Remembering each watched file's last-seen modification time
//!   (`snapshot.rs`).
//! - Walking the watch root and turning filesystem state into a change-set
//!   (`scanner.rs`).
//!
//! It does **not** decide what to do about changes; the engine owns the
//! poll cycle and hands change-sets to the executor.

pub mod filter;
pub mod scanner;
pub mod snapshot;

pub use filter::FileFilter;
pub use scanner::{ChangeEvent, ScanMode, ScanOutcome, Scanner};
pub use snapshot::{ChangeKind, SnapshotStore};
