// src/watch/scanner.rs

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::errors::ScanRootError;
use crate::watch::filter::FileFilter;
use crate::watch::snapshot::{ChangeKind, SnapshotStore};

/// Whether a scan establishes the baseline or detects changes against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// First traversal: populate the snapshot, report nothing.
    Baseline,
    /// Steady-state traversal: report every created/modified file.
    Poll,
}

/// One detected change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

/// Everything one scan pass observed.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub changes: Vec<ChangeEvent>,
}

impl ScanOutcome {
    pub fn changed_count(&self) -> usize {
        self.changes.len()
    }
}

/// Walks the watch root, filters file names and feeds modification times
/// into the snapshot store.
///
/// Error policy: a root that is missing or not a directory fails the scan
/// ([`ScanRootError`]); anything below the root that cannot be read is
/// skipped with a warning and the traversal continues with its siblings.
#[derive(Debug)]
pub struct Scanner {
    root: PathBuf,
    filter: FileFilter,
    recursive: bool,
    snapshot: SnapshotStore,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>, filter: FileFilter, recursive: bool) -> Self {
        Self {
            root: root.into(),
            filter,
            recursive,
            snapshot: SnapshotStore::new(),
        }
    }

    /// Number of files currently tracked in the snapshot.
    pub fn tracked_files(&self) -> usize {
        self.snapshot.len()
    }

    /// Traverse the root once and return the change-set for this pass.
    ///
    /// In [`ScanMode::Baseline`] the snapshot is populated but the returned
    /// change-set is always empty.
    pub fn scan(&mut self, mode: ScanMode) -> Result<ScanOutcome> {
        self.check_root()?;

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut outcome = ScanOutcome::default();

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(false);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !self.filter.is_relevant(&name) {
                continue;
            }

            let modified = match entry.path().metadata().and_then(|m| m.modified()) {
                Ok(modified) => modified,
                Err(err) => {
                    // Likely deleted between readdir and stat; the next scan
                    // will sort it out.
                    warn!(path = ?entry.path(), error = %err, "could not read modification time");
                    continue;
                }
            };

            let kind = self.snapshot.upsert(entry.path().to_path_buf(), modified);
            if kind != ChangeKind::Unchanged && mode == ScanMode::Poll {
                debug!(path = ?entry.path(), ?kind, "change detected");
                outcome.changes.push(ChangeEvent {
                    path: entry.into_path(),
                    kind,
                });
            }
        }

        Ok(outcome)
    }

    fn check_root(&self) -> Result<(), ScanRootError> {
        match fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(ScanRootError::NotADirectory(self.root.clone())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(ScanRootError::Missing(self.root.clone()))
            }
            Err(err) => Err(ScanRootError::Unreadable(self.root.clone(), err)),
        }
    }
}
