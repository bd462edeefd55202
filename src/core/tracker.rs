//! Routing of directory events to per-directory sequence registries.
//!
//! [`SequenceTracker`] sits between the [`crate::core::dir_monitor::DirMonitor`]
//! and the engine. It keeps one [`ImageSeqMon`] per parent directory, so a
//! sequence never spans two directories, and remembers which files could not
//! be sequenced so they can be listed.
//!
//! # Public API
//! - [`SequenceTracker`]: Applies [`DirEvent`]s and exposes the resulting state
//! - [`ImageFilter`]: Extension allow-list applied before the engine sees a file
//! - [`TrackerUpdate`]: What one applied event did
//! - [`SequenceSummary`]: Serializable description of one sequence

use crate::core::error::{Result, SeqMonError};
use crate::core::events::{DirEvent, EntryKind, FsEntry};
use crate::core::frame_ranges::FrameRanges;
use crate::core::image::{basename_of, CachedImage};
use crate::core::image_seq::ImageSeq;
use crate::core::seq_mon::{AddOutcome, DeleteOutcome, ImageSeqMon};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Case-insensitive extension allow-list; empty means every file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageFilter {
    extensions: Vec<String>,
}

impl ImageFilter {
    /// Accept only files with one of `extensions` (leading dots are ignored)
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { extensions }
    }

    /// Accept every file
    pub fn all() -> Self {
        Self::default()
    }

    pub fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|allowed| *allowed == ext)
            })
    }
}

/// Effect of one applied event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerUpdate {
    Added {
        directory: PathBuf,
        outcome: AddOutcome,
    },
    Changed {
        directory: PathBuf,
        outcome: AddOutcome,
    },
    Deleted {
        directory: PathBuf,
        outcome: DeleteOutcome,
    },
    /// A directory disappeared, taking this many sequences with it
    DirectoryRemoved { directory: PathBuf, sequences: usize },
    /// Directory additions and changes, and files outside the filter
    Ignored,
}

impl TrackerUpdate {
    /// Whether the set of sequences or their frames changed
    pub fn changes_sequences(&self) -> bool {
        match self {
            TrackerUpdate::Added { outcome, .. } | TrackerUpdate::Changed { outcome, .. } => {
                *outcome != AddOutcome::Unsequenced
            }
            TrackerUpdate::Deleted { outcome, .. } => *outcome != DeleteOutcome::NotTracked,
            TrackerUpdate::DirectoryRemoved { sequences, .. } => *sequences > 0,
            TrackerUpdate::Ignored => false,
        }
    }
}

/// One [`ImageSeqMon`] per directory plus the files no sequence took
#[derive(Debug, Default)]
pub struct SequenceTracker {
    filter: ImageFilter,
    monitors: BTreeMap<PathBuf, ImageSeqMon>,
    unsequenced: BTreeSet<PathBuf>,
}

impl SequenceTracker {
    pub fn new(filter: ImageFilter) -> Self {
        Self {
            filter,
            monitors: BTreeMap::new(),
            unsequenced: BTreeSet::new(),
        }
    }

    /// Apply one event to the directory it belongs to.
    ///
    /// A file whose name cannot be read (not UTF-8, or no final component) is
    /// logged and skipped as [`TrackerUpdate::Ignored`]; an empty path is an
    /// error.
    pub fn apply(&mut self, event: &DirEvent) -> Result<TrackerUpdate> {
        match self.route(event) {
            Err(e @ (SeqMonError::InvalidUtf8Path { .. } | SeqMonError::MissingFileName { .. })) => {
                log::warn!("Skipping entry: {e}");
                Ok(TrackerUpdate::Ignored)
            }
            other => other,
        }
    }

    fn route(&mut self, event: &DirEvent) -> Result<TrackerUpdate> {
        match event {
            DirEvent::Added(entry) if entry.kind == EntryKind::File => self.file_added(entry),
            DirEvent::Changed(entry) if entry.kind == EntryKind::File => self.file_changed(entry),
            DirEvent::Deleted {
                path,
                kind: EntryKind::File,
            } => self.file_deleted(path),
            DirEvent::Deleted {
                path,
                kind: EntryKind::Dir,
            } => Ok(self.directory_removed(path)),
            DirEvent::Added(_) | DirEvent::Changed(_) => Ok(TrackerUpdate::Ignored),
        }
    }

    /// Apply a batch of events in order, returning the update for each
    pub fn apply_all(&mut self, events: &[DirEvent]) -> Result<Vec<TrackerUpdate>> {
        events.iter().map(|event| self.apply(event)).collect()
    }

    fn file_added(&mut self, entry: &FsEntry) -> Result<TrackerUpdate> {
        if !self.filter.accepts(&entry.path) {
            return Ok(TrackerUpdate::Ignored);
        }
        let image = CachedImage::new(&entry.path, entry.size, entry.modified)?;
        let directory = parent_of(&entry.path);

        let outcome = self
            .monitors
            .entry(directory.clone())
            .or_default()
            .image_added(image);
        self.record_unsequenced(&directory, &entry.path, outcome);

        Ok(TrackerUpdate::Added { directory, outcome })
    }

    fn file_changed(&mut self, entry: &FsEntry) -> Result<TrackerUpdate> {
        if !self.filter.accepts(&entry.path) {
            return Ok(TrackerUpdate::Ignored);
        }
        let image = CachedImage::new(&entry.path, entry.size, entry.modified)?;
        let directory = parent_of(&entry.path);

        let outcome = self
            .monitors
            .entry(directory.clone())
            .or_default()
            .image_changed(image)?;
        self.record_unsequenced(&directory, &entry.path, outcome);

        Ok(TrackerUpdate::Changed { directory, outcome })
    }

    fn file_deleted(&mut self, path: &Path) -> Result<TrackerUpdate> {
        basename_of(path)?;
        if !self.filter.accepts(path) {
            return Ok(TrackerUpdate::Ignored);
        }
        self.unsequenced.remove(path);
        let directory = parent_of(path);

        let outcome = match self.monitors.get_mut(&directory) {
            Some(monitor) => monitor.file_deleted(path)?,
            None => DeleteOutcome::NotTracked,
        };
        self.drop_if_empty(&directory);

        Ok(TrackerUpdate::Deleted { directory, outcome })
    }

    fn directory_removed(&mut self, directory: &Path) -> TrackerUpdate {
        let doomed: Vec<PathBuf> = self
            .monitors
            .keys()
            .filter(|dir| dir.starts_with(directory))
            .cloned()
            .collect();

        let mut sequences = 0;
        for dir in doomed {
            if let Some(monitor) = self.monitors.remove(&dir) {
                sequences += monitor.len();
            }
        }
        self.unsequenced.retain(|path| !path.starts_with(directory));

        if sequences > 0 {
            log::debug!(
                "Directory {} removed with {} sequences",
                directory.display(),
                sequences
            );
        }
        TrackerUpdate::DirectoryRemoved {
            directory: directory.to_path_buf(),
            sequences,
        }
    }

    fn record_unsequenced(&mut self, directory: &Path, path: &Path, outcome: AddOutcome) {
        if outcome == AddOutcome::Unsequenced {
            self.unsequenced.insert(path.to_path_buf());
            self.drop_if_empty(directory);
        } else {
            self.unsequenced.remove(path);
        }
    }

    fn drop_if_empty(&mut self, directory: &Path) {
        if self.monitors.get(directory).is_some_and(ImageSeqMon::is_empty) {
            self.monitors.remove(directory);
        }
    }

    /// Directories that currently hold sequences, in path order
    pub fn directories(&self) -> impl Iterator<Item = (&Path, &ImageSeqMon)> + '_ {
        self.monitors
            .iter()
            .map(|(dir, monitor)| (dir.as_path(), monitor))
    }

    pub fn monitor(&self, directory: &Path) -> Option<&ImageSeqMon> {
        self.monitors.get(directory)
    }

    /// Files that were seen but have no numeric run, in path order
    pub fn unsequenced(&self) -> impl Iterator<Item = &Path> + '_ {
        self.unsequenced.iter().map(PathBuf::as_path)
    }

    pub fn sequence_count(&self) -> usize {
        self.monitors.values().map(ImageSeqMon::len).sum()
    }

    /// Summaries of every sequence, grouped by directory in path order
    pub fn summaries(&self) -> Vec<SequenceSummary> {
        self.directories()
            .flat_map(|(dir, monitor)| {
                monitor
                    .sequences()
                    .iter()
                    .map(move |seq| SequenceSummary::new(dir, seq))
            })
            .collect()
    }
}

fn parent_of(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

/// Serializable description of one sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceSummary {
    pub directory: PathBuf,
    pub pattern: String,
    pub prefix: String,
    pub suffix: String,
    pub padding: Option<usize>,
    pub first: u64,
    pub last: u64,
    pub count: usize,
    pub frames: String,
    pub missing: String,
    pub missing_count: u64,
    pub total_size: u64,
    pub latest_modified: Option<DateTime<Utc>>,
}

impl SequenceSummary {
    pub fn new(directory: &Path, seq: &ImageSeq) -> Self {
        Self {
            directory: directory.to_path_buf(),
            pattern: seq.pattern(),
            prefix: seq.prefix().to_string(),
            suffix: seq.suffix().to_string(),
            padding: seq.width().padding(),
            first: seq.first_frame().unwrap_or_default(),
            last: seq.last_frame().unwrap_or_default(),
            count: seq.len(),
            frames: FrameRanges::format(&seq.frame_numbers()),
            missing: FrameRanges::join(&seq.missing_ranges()),
            missing_count: seq.missing_count(),
            total_size: seq.total_size(),
            latest_modified: seq.latest_modified().map(DateTime::<Utc>::from),
        }
    }
}
