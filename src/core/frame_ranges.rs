//! Compact frame-range notation.
//!
//! This module turns frame numbers into the range notation used in all seqmon
//! output, such as `1-3,5,7-9`.
//!
//! # Public API
//! - [`FrameRange`]: An inclusive run of consecutive frame numbers
//! - [`FrameRanges`]: Compaction and formatting helpers
//!
//! # Supported Formats
//! - **Single frames**: `5`
//! - **Ranges**: `3-6` (frames 3, 4, 5 and 6)
//! - **Mixed**: `1-3,5,7-9`

use std::fmt;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRange {
    pub start: u64,
    pub end: u64,
}

impl FrameRange {
    pub fn frame_count(&self) -> u64 {
        (self.end - self.start).saturating_add(1)
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// The frame numbers in this range, produced lazily
    pub fn frames(&self) -> RangeInclusive<u64> {
        self.start..=self.end
    }
}

impl fmt::Display for FrameRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

pub struct FrameRanges;

impl FrameRanges {
    /// Collapse frame numbers into inclusive runs.
    ///
    /// Input order does not matter and duplicates are ignored.
    pub fn compact(frames: &[u64]) -> Vec<FrameRange> {
        let mut sorted = frames.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let mut ranges: Vec<FrameRange> = Vec::new();
        for frame in sorted {
            match ranges.last_mut() {
                Some(last) if last.end.checked_add(1) == Some(frame) => last.end = frame,
                _ => ranges.push(FrameRange {
                    start: frame,
                    end: frame,
                }),
            }
        }
        ranges
    }

    /// Format frame numbers as `1-3,5,7-9`; empty input gives an empty string
    pub fn format(frames: &[u64]) -> String {
        Self::join(&Self::compact(frames))
    }

    /// Format already-compacted ranges as `1-3,5,7-9`
    pub fn join(ranges: &[FrameRange]) -> String {
        ranges
            .iter()
            .map(FrameRange::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Frames covered by `ranges`, saturating at `u64::MAX`
    pub fn total(ranges: &[FrameRange]) -> u64 {
        ranges
            .iter()
            .map(FrameRange::frame_count)
            .fold(0, u64::saturating_add)
    }
}
