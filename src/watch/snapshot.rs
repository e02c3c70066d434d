// src/watch/snapshot.rs

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Classification of a single observation of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Modified,
    Unchanged,
}

/// In-memory map of watched file path to its last-seen modification time.
///
/// Entries are never removed: a file deleted from disk simply stops being
/// re-observed, and its stale entry is harmless since the map is bounded by
/// the set of files ever seen. The scanner is the only mutator, through
/// [`SnapshotStore::upsert`].
#[derive(Debug, Default)]
pub struct SnapshotStore {
    entries: HashMap<PathBuf, SystemTime>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, path: &Path) -> Option<SystemTime> {
        self.entries.get(path).copied()
    }

    /// Record an observation and classify it.
    ///
    /// Inserting an unseen path returns `Created`; a differing timestamp on
    /// a known path updates the entry in place and returns `Modified`; an
    /// equal timestamp returns `Unchanged`. This is the sole mutation entry
    /// point and the basis of change detection.
    pub fn upsert(&mut self, path: PathBuf, modified: SystemTime) -> ChangeKind {
        match self.entries.entry(path) {
            Entry::Vacant(vacant) => {
                vacant.insert(modified);
                ChangeKind::Created
            }
            Entry::Occupied(mut occupied) => {
                if *occupied.get() == modified {
                    ChangeKind::Unchanged
                } else {
                    occupied.insert(modified);
                    ChangeKind::Modified
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
