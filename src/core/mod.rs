//! Core functionality for seqmon.
//!
//! This module provides the sequence detection engine, the polling directory
//! monitor that feeds it, configuration, error handling, and UI components.

pub mod colors;
pub mod config;
pub mod dir_monitor;
pub mod dirs;
pub mod error;
pub mod events;
pub mod frame_ranges;
pub mod image;
pub mod image_seq;
pub mod output;
pub mod seq_mon;
pub mod templates;
pub mod tracker;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{Result, SeqMonError};

// === Sequence engine ===
// Image records, sequences, and the per-directory registry
pub use image::{CachedImage, NumericRun};
pub use image_seq::{ImageSeq, WidthPolicy};
pub use seq_mon::{AddOutcome, DeleteOutcome, ImageSeqMon};

// === Directory watching ===
// Snapshot-diffing monitor and the events it produces
pub use dir_monitor::{events_of_kind, DirMonitor, MonitorOptions};
pub use events::{DirEvent, EntryKind, EventKind, FsEntry};

// === Tracking ===
// Routes directory events to one registry per directory
pub use tracker::{ImageFilter, SequenceSummary, SequenceTracker, TrackerUpdate};

// === Frame ranges ===
// Compact "1-3,5,7-9" formatting of frame numbers
pub use frame_ranges::{FrameRange, FrameRanges};

// === Configuration ===
pub use config::WatchConfig;

// === UI templates ===
// Template system for consistent output formatting with colors
pub use templates::{
    render_template, render_template_plain, strip_ansi_codes, TemplateContext, Templates, TEMPLATES,
};

// === Color system ===
pub use colors::{get_colored_path, get_event_color_style, get_event_symbol};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{
    format_error, format_success, print_error, print_info, print_section_header, print_success,
};
