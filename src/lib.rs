//! Seqmon - detects numbered image sequences in directories and keeps them current.
//!
//! Files such as `frame_001.tga`, `frame_002.tga` are grouped into sequences by
//! their shared prefix, suffix and frame-number padding. A polling monitor turns
//! directory changes into events that keep the detected sequences up to date.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Image records and numeric-run parsing
//! - Sequences and the per-directory sequence registry
//! - Directory monitoring and event tracking
//! - Error handling and result types
//! - UI templates and color system

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    // Sequence engine
    AddOutcome,
    CachedImage,
    DeleteOutcome,
    // Directory watching
    DirEvent,
    DirMonitor,
    EntryKind,
    EventKind,
    FrameRange,
    FrameRanges,
    FsEntry,
    ImageFilter,
    ImageSeq,
    ImageSeqMon,
    MonitorOptions,
    NumericRun,
    // Error handling
    Result,
    SeqMonError,
    SequenceSummary,
    SequenceTracker,
    TrackerUpdate,
    WatchConfig,
    WidthPolicy,
};
