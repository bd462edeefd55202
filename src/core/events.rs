//! Directory change events.
//!
//! This module defines [`DirEvent`], the closed set of notifications the
//! directory monitor produces and the sequence tracker consumes. Events are
//! plain values passed through a single-threaded loop; there are no observer
//! callbacks.
//!
//! # Public API
//! - [`DirEvent`]: `Added`, `Changed` or `Deleted`, with the affected entry
//! - [`EventKind`]: The event's kind alone, for display and colouring
//! - [`EntryKind`]: Whether the entry is a file or a directory
//! - [`FsEntry`]: Path plus the metadata observed for it

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Kind of filesystem entry an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntryKind {
    File,
    Dir,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Dir => "dir",
        }
    }
}

/// An entry as seen by one directory scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FsEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub size: u64,
    pub modified: SystemTime,
}

/// One observed change in a monitored directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DirEvent {
    Added(FsEntry),
    Changed(FsEntry),
    Deleted { path: PathBuf, kind: EntryKind },
}

impl DirEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DirEvent::Added(_) => EventKind::Added,
            DirEvent::Changed(_) => EventKind::Changed,
            DirEvent::Deleted { .. } => EventKind::Deleted,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            DirEvent::Added(entry) | DirEvent::Changed(entry) => &entry.path,
            DirEvent::Deleted { path, .. } => path,
        }
    }

    pub fn entry_kind(&self) -> EntryKind {
        match self {
            DirEvent::Added(entry) | DirEvent::Changed(entry) => entry.kind,
            DirEvent::Deleted { kind, .. } => *kind,
        }
    }
}

/// Event kind without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    Added,
    Changed,
    Deleted,
}

impl EventKind {
    /// Single-character symbol used in watch output
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Added => "+",
            EventKind::Changed => "~",
            EventKind::Deleted => "-",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            EventKind::Added => "added",
            EventKind::Changed => "changed",
            EventKind::Deleted => "deleted",
        }
    }

    /// Delivery order within one poll: deletions first, then changes, then additions
    pub fn sort_priority(&self) -> u8 {
        match self {
            EventKind::Deleted => 0,
            EventKind::Changed => 1,
            EventKind::Added => 2,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, kind: EntryKind) -> FsEntry {
        FsEntry {
            path: PathBuf::from(path),
            kind,
            size: 10,
            modified: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_event_kind_as_str() {
        assert_eq!(EventKind::Added.as_str(), "+");
        assert_eq!(EventKind::Changed.as_str(), "~");
        assert_eq!(EventKind::Deleted.as_str(), "-");
    }

    #[test]
    fn test_event_kind_display() {
        assert_eq!(format!("{}", EventKind::Deleted), "-");
    }

    #[test]
    fn test_description() {
        assert_eq!(EventKind::Added.description(), "added");
        assert_eq!(EventKind::Changed.description(), "changed");
        assert_eq!(EventKind::Deleted.description(), "deleted");
    }

    #[test]
    fn test_sort_priority() {
        assert!(EventKind::Deleted.sort_priority() < EventKind::Changed.sort_priority());
        assert!(EventKind::Changed.sort_priority() < EventKind::Added.sort_priority());
    }

    #[test]
    fn test_event_accessors() {
        let added = DirEvent::Added(entry("renders/frame_001.exr", EntryKind::File));
        assert_eq!(added.kind(), EventKind::Added);
        assert_eq!(added.path(), Path::new("renders/frame_001.exr"));
        assert_eq!(added.entry_kind(), EntryKind::File);

        let deleted = DirEvent::Deleted {
            path: PathBuf::from("renders/old"),
            kind: EntryKind::Dir,
        };
        assert_eq!(deleted.kind(), EventKind::Deleted);
        assert_eq!(deleted.entry_kind(), EntryKind::Dir);
    }

    #[test]
    fn test_event_serialization() -> serde_json::Result<()> {
        let event = DirEvent::Changed(entry("a_1.png", EntryKind::File));
        let json = serde_json::to_string(&event)?;
        assert!(json.contains("Changed"));
        assert!(json.contains("a_1.png"));
        Ok(())
    }
}
