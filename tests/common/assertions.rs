//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating seqmon command output and error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Checks for the numbered sequence line, e.g. `[1] frame_###.tga  1-3  (3 frames)`
pub fn has_sequence(n: usize, pattern: &str, frames: &str, count: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("[{n}] {pattern}  {frames}  ({count} frames)"))
}

pub fn has_missing(ranges: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("missing: {ranges}"))
}

pub fn has_summary(sequences: usize, unsequenced: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("{sequences} sequences, {unsequenced} unsequenced"))
}

pub fn no_sequences() -> impl Predicate<str> {
    predicates::str::contains("No image sequences found")
}

/// Checks for the error banner printed before exiting with status 1
pub fn has_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains("✕ Error:").and(predicates::str::contains(message.to_string()))
}
