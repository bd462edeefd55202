//! The per-directory sequence registry.
//!
//! [`ImageSeqMon`] owns every [`ImageSeq`] known for one monitored directory and
//! reacts to file-level events. It is a flat, ordered registry: new sequences
//! are appended, and an incoming image is offered to the existing sequences in
//! creation order until one accepts it.
//!
//! # Public API
//! - [`ImageSeqMon`]: The registry and its event entry points
//! - [`AddOutcome`]: Where an added image ended up
//! - [`DeleteOutcome`]: What a delete did to the registry
//!
//! # Assignment Rule
//! The first existing sequence that matches wins, even when a later sequence
//! would also match. Grouping is therefore reproducible for a given event
//! order. Sequences left without frames are pruned immediately.

use crate::core::error::{Result, SeqMonError};
use crate::core::image::CachedImage;
use crate::core::image_seq::ImageSeq;
use std::path::Path;

/// Result of offering an image to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Accepted by the existing sequence at this index
    Joined(usize),
    /// Seeded a new sequence, appended at this index
    Created(usize),
    /// File name has no numeric run; not tracked
    Unsequenced,
}

/// Result of a file deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Frame removed from the sequence at `index`; `pruned` when the sequence
    /// became empty and was dropped
    Removed { index: usize, pruned: bool },
    /// No sequence held the path
    NotTracked,
}

/// Ordered collection of the sequences detected in one directory
#[derive(Debug, Clone, Default)]
pub struct ImageSeqMon {
    sequences: Vec<ImageSeq>,
}

impl ImageSeqMon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a newly observed image to the first sequence that accepts it, or
    /// seed a new sequence from it.
    pub fn image_added(&mut self, image: CachedImage) -> AddOutcome {
        // add_image consumes the image, so test membership before handing it over
        if let Some(index) = self.sequences.iter().position(|seq| seq.matches(&image)) {
            self.sequences[index].add_image(image);
            return AddOutcome::Joined(index);
        }

        match ImageSeq::from_seed(image) {
            Some(seq) => {
                log::debug!("New sequence {}", seq.pattern());
                self.sequences.push(seq);
                AddOutcome::Created(self.sequences.len() - 1)
            }
            None => AddOutcome::Unsequenced,
        }
    }

    /// Remove `path` from the sequence holding it.
    ///
    /// Rejects an empty path instead of treating it as "not tracked".
    pub fn file_deleted(&mut self, path: &Path) -> Result<DeleteOutcome> {
        if path.as_os_str().is_empty() {
            return Err(SeqMonError::EmptyPath);
        }

        let Some(index) = self
            .sequences
            .iter_mut()
            .position(|seq| seq.remove_image(path))
        else {
            return Ok(DeleteOutcome::NotTracked);
        };

        let pruned = self.sequences[index].is_empty();
        if pruned {
            let seq = self.sequences.remove(index);
            log::debug!("Sequence {} emptied and pruned", seq.pattern());
        }
        Ok(DeleteOutcome::Removed { index, pruned })
    }

    /// Replace the frame for a file whose contents or metadata changed
    pub fn image_changed(&mut self, image: CachedImage) -> Result<AddOutcome> {
        self.file_deleted(image.path())?;
        Ok(self.image_added(image))
    }

    /// Snapshot copy of the current sequences, in creation order
    pub fn get_image_sequences(&self) -> Vec<ImageSeq> {
        self.sequences.clone()
    }

    /// Borrowed view of the current sequences, in creation order
    pub fn sequences(&self) -> &[ImageSeq] {
        &self.sequences
    }

    /// The sequence currently holding `path`
    pub fn sequence_for(&self, path: &Path) -> Option<&ImageSeq> {
        self.sequences.iter().find(|seq| seq.contains_path(path))
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}
