//! Consolidated test utilities for seqmon
//!
//! This module provides unified testing utilities for integration tests,
//! built around real temporary directories filled with frame files.

pub mod assertions;
pub mod directory;
pub mod fixtures;
