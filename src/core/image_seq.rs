//! A single detected image sequence.
//!
//! An [`ImageSeq`] owns one filename pattern (prefix, digit width policy and
//! suffix) and the frames currently present for it. It decides membership for
//! candidate images but never decides what happens to an image it rejects;
//! that is the job of [`crate::core::seq_mon::ImageSeqMon`].
//!
//! # Public API
//! - [`ImageSeq`]: Pattern plus frame set, with add/remove/match operations
//! - [`WidthPolicy`]: Whether the digit width is part of the pattern identity
//!
//! # Width Policy
//! The policy is fixed by the seed image. A zero-padded seed (`frame_007.tga`)
//! makes a [`WidthPolicy::Padded`] sequence that only accepts runs of exactly
//! the same width. Any other seed (`frame_7.tga`, `frame_120.tga`) makes an
//! [`WidthPolicy::Unpadded`] sequence that accepts runs of any width without a
//! leading zero.

use crate::core::frame_ranges::{FrameRange, FrameRanges};
use crate::core::image::{CachedImage, NumericRun};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::SystemTime;

/// Whether the textual width of the frame number is significant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WidthPolicy {
    /// Zero-padded to exactly this many digits
    Padded(usize),
    /// Natural numbers without leading zeros, any width
    Unpadded,
}

impl WidthPolicy {
    /// Infer the policy a seed run establishes
    pub fn infer(run: &NumericRun) -> Self {
        if run.is_zero_padded() {
            WidthPolicy::Padded(run.width())
        } else {
            WidthPolicy::Unpadded
        }
    }

    /// Whether a candidate run satisfies this policy
    pub fn accepts(&self, run: &NumericRun) -> bool {
        match *self {
            WidthPolicy::Padded(width) => run.width() == width,
            WidthPolicy::Unpadded => !run.is_zero_padded(),
        }
    }

    /// Padding width, or `None` for unpadded sequences
    pub fn padding(&self) -> Option<usize> {
        match *self {
            WidthPolicy::Padded(width) => Some(width),
            WidthPolicy::Unpadded => None,
        }
    }
}

/// One sequence: a fixed pattern and its frames in ascending order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSeq {
    prefix: String,
    suffix: String,
    width: WidthPolicy,
    frames: BTreeMap<u64, CachedImage>,
}

impl ImageSeq {
    /// Seed a new sequence from a single image.
    ///
    /// Returns `None` when the image's file name has no numeric run, since
    /// such an image cannot define a pattern.
    pub fn from_seed(image: CachedImage) -> Option<Self> {
        let run = image.run()?;
        let value = run.value;
        let mut seq = Self {
            prefix: run.prefix.clone(),
            suffix: run.suffix.clone(),
            width: WidthPolicy::infer(run),
            frames: BTreeMap::new(),
        };
        seq.frames.insert(value, image);
        Some(seq)
    }

    /// Whether `image` has exactly this sequence's pattern
    pub fn matches(&self, image: &CachedImage) -> bool {
        match image.run() {
            Some(run) => {
                run.prefix == self.prefix && run.suffix == self.suffix && self.width.accepts(run)
            }
            None => false,
        }
    }

    /// Insert `image` as a frame if it matches; an existing frame with the
    /// same number is replaced.
    pub fn add_image(&mut self, image: CachedImage) -> bool {
        if !self.matches(&image) {
            return false;
        }
        let Some(value) = image.frame_number() else {
            return false;
        };
        if let Some(previous) = self.frames.insert(value, image) {
            log::debug!(
                "Frame {} of {} replaced (was {})",
                value,
                self.pattern(),
                previous.path().display()
            );
        }
        true
    }

    /// Remove the frame backed by `path`, if any
    pub fn remove_image(&mut self, path: &Path) -> bool {
        let found = self
            .frames
            .iter()
            .find(|(_, image)| image.path() == path)
            .map(|(value, _)| *value);

        match found {
            Some(value) => {
                self.frames.remove(&value);
                true
            }
            None => false,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn width(&self) -> WidthPolicy {
        self.width
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames in ascending frame order
    pub fn frames(&self) -> impl Iterator<Item = (u64, &CachedImage)> + '_ {
        self.frames.iter().map(|(value, image)| (*value, image))
    }

    pub fn frame_numbers(&self) -> Vec<u64> {
        self.frames.keys().copied().collect()
    }

    pub fn first_frame(&self) -> Option<u64> {
        self.frames.keys().next().copied()
    }

    pub fn last_frame(&self) -> Option<u64> {
        self.frames.keys().next_back().copied()
    }

    pub fn contains_path(&self, path: &Path) -> bool {
        self.frames.values().any(|image| image.path() == path)
    }

    /// Gaps between the first and last frame, as inclusive ranges
    pub fn missing_ranges(&self) -> Vec<FrameRange> {
        self.frames
            .keys()
            .zip(self.frames.keys().skip(1))
            .filter(|(prev, next)| *next - *prev > 1)
            .map(|(prev, next)| FrameRange {
                start: prev + 1,
                end: next - 1,
            })
            .collect()
    }

    /// Number of frames absent between the first and last frame
    pub fn missing_count(&self) -> u64 {
        FrameRanges::total(&self.missing_ranges())
    }

    /// File name this sequence's pattern gives to frame `value`
    pub fn frame_name(&self, value: u64) -> String {
        let mut buffer = itoa::Buffer::new();
        let digits = buffer.format(value);
        let padding = self
            .width
            .padding()
            .map_or(0, |width| width.saturating_sub(digits.len()));

        let mut name =
            String::with_capacity(self.prefix.len() + padding + digits.len() + self.suffix.len());
        name.push_str(&self.prefix);
        name.extend(std::iter::repeat('0').take(padding));
        name.push_str(digits);
        name.push_str(&self.suffix);
        name
    }

    /// Display form of the pattern: `frame_###.tga` when padded, `frame_@.tga` otherwise
    pub fn pattern(&self) -> String {
        let placeholder = match self.width {
            WidthPolicy::Padded(width) => "#".repeat(width),
            WidthPolicy::Unpadded => "@".to_string(),
        };
        format!("{}{}{}", self.prefix, placeholder, self.suffix)
    }

    /// Sum of the sizes of all frames
    pub fn total_size(&self) -> u64 {
        self.frames.values().map(CachedImage::size).sum()
    }

    /// Most recent modification time among the frames
    pub fn latest_modified(&self) -> Option<SystemTime> {
        self.frames.values().map(CachedImage::modified).max()
    }
}
