//! Polling directory monitor.
//!
//! [`DirMonitor`] keeps a snapshot of a directory (optionally its whole tree)
//! and, on each [`DirMonitor::poll`], rescans it and reports the differences as
//! [`DirEvent`]s. The snapshot starts empty, so the first poll reports every
//! existing entry as added.
//!
//! # Public API
//! - [`DirMonitor`]: Snapshot holder with `poll`
//! - [`MonitorOptions`]: Recursion and hidden-file settings
//!
//! # Event Order
//! Each poll returns all deletions, then all changes, then all additions, each
//! group in path order. An entry that switched between file and directory is
//! reported as deleted and re-added.

use crate::core::error::{Result, SeqMonError};
use crate::core::events::{DirEvent, EntryKind, EventKind, FsEntry};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::{DirEntry, WalkDir};

/// Scan settings for a [`DirMonitor`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorOptions {
    /// Descend into subdirectories
    pub recursive: bool,
    /// Report entries whose name starts with `.`
    pub include_hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EntryStat {
    kind: EntryKind,
    size: u64,
    modified: SystemTime,
}

type Snapshot = BTreeMap<PathBuf, EntryStat>;

/// Watches one directory by comparing successive scans
#[derive(Debug)]
pub struct DirMonitor {
    root: PathBuf,
    options: MonitorOptions,
    snapshot: Snapshot,
}

impl DirMonitor {
    /// Create a monitor for `root`, which must be an existing directory
    pub fn new(root: impl Into<PathBuf>, options: MonitorOptions) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(SeqMonError::not_a_directory(root));
        }
        log::debug!(
            "Monitoring {} (recursive: {}, hidden: {})",
            root.display(),
            options.recursive,
            options.include_hidden
        );
        Ok(Self {
            root,
            options,
            snapshot: Snapshot::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn options(&self) -> MonitorOptions {
        self.options
    }

    /// Number of entries in the last scan
    pub fn snapshot_len(&self) -> usize {
        self.snapshot.len()
    }

    /// Rescan and return what changed since the previous poll
    pub fn poll(&mut self) -> Result<Vec<DirEvent>> {
        let current = self.scan()?;
        let events = diff_snapshots(&self.snapshot, &current);
        self.snapshot = current;
        if !events.is_empty() {
            log::debug!("Poll of {} found {} events", self.root.display(), events.len());
        }
        Ok(events)
    }

    fn scan(&self) -> Result<Snapshot> {
        if !self.root.is_dir() {
            return Err(SeqMonError::not_a_directory(&self.root));
        }

        let mut walker = WalkDir::new(&self.root).min_depth(1).follow_links(false);
        if !self.options.recursive {
            walker = walker.max_depth(1);
        }

        let include_hidden = self.options.include_hidden;
        let mut snapshot = Snapshot::new();

        for entry in walker
            .into_iter()
            .filter_entry(|e| include_hidden || !is_hidden(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    // Entries can vanish or be unreadable between listing and stat
                    log::warn!("Skipping entry during scan: {e}");
                    continue;
                }
            };

            // Links are not descended into, but they take the kind of their target
            let metadata = if entry.path_is_symlink() {
                fs::metadata(entry.path())
            } else {
                entry.metadata().map_err(io::Error::from)
            };
            let metadata = match metadata {
                Ok(metadata) => metadata,
                Err(e) => {
                    log::warn!("Skipping entry: {}", SeqMonError::metadata_failed(entry.path(), e));
                    continue;
                }
            };

            let kind = if metadata.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            };
            let size = match kind {
                EntryKind::Dir => 0,
                EntryKind::File => metadata.len(),
            };
            let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);

            snapshot.insert(
                entry.into_path(),
                EntryStat {
                    kind,
                    size,
                    modified,
                },
            );
        }

        Ok(snapshot)
    }
}

/// The root itself is never treated as hidden, only what lies beneath it
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn diff_snapshots(previous: &Snapshot, current: &Snapshot) -> Vec<DirEvent> {
    let mut events = Vec::new();

    for (path, old) in previous {
        match current.get(path) {
            Some(new) if new.kind == old.kind => {
                if new.size != old.size || new.modified != old.modified {
                    events.push(DirEvent::Changed(to_entry(path, new)));
                }
            }
            Some(new) => {
                events.push(DirEvent::Deleted {
                    path: path.clone(),
                    kind: old.kind,
                });
                events.push(DirEvent::Added(to_entry(path, new)));
            }
            None => events.push(DirEvent::Deleted {
                path: path.clone(),
                kind: old.kind,
            }),
        }
    }

    for (path, new) in current {
        if !previous.contains_key(path) {
            events.push(DirEvent::Added(to_entry(path, new)));
        }
    }

    // Stable sort keeps path order inside each group
    events.sort_by(|a, b| {
        a.kind()
            .sort_priority()
            .cmp(&b.kind().sort_priority())
            .then_with(|| a.path().cmp(b.path()))
    });
    events
}

fn to_entry(path: &Path, stat: &EntryStat) -> FsEntry {
    FsEntry {
        path: path.to_path_buf(),
        kind: stat.kind,
        size: stat.size,
        modified: stat.modified,
    }
}

/// Events of a given kind from a poll result
pub fn events_of_kind(events: &[DirEvent], kind: EventKind) -> impl Iterator<Item = &DirEvent> {
    events.iter().filter(move |event| event.kind() == kind)
}
