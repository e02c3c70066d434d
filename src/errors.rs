// src/errors.rs

//! Crate-wide error aliases and structured startup errors.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal problems with the watch root, raised before or during a scan.
///
/// Anything else that goes wrong while traversing the tree (an unreadable
/// subdirectory, a file deleted mid-scan) is recoverable and handled inside
/// the scanner.
#[derive(Debug, Error)]
pub enum ScanRootError {
    #[error("watch path {0:?} does not exist")]
    Missing(PathBuf),

    #[error("watch path {0:?} is not a directory")]
    NotADirectory(PathBuf),

    #[error("watch path {0:?} could not be read")]
    Unreadable(PathBuf, #[source] std::io::Error),
}

pub use anyhow::{Error, Result};
