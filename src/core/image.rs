//! Immutable snapshots of observed files.
//!
//! A [`CachedImage`] records one file's identity (its path) together with the
//! metadata seen when it was observed, and the decomposition of its file name
//! into the parts the sequence engine matches on.
//!
//! # Public API
//! - [`CachedImage`]: Path, parsed numeric run, size and modification time
//! - [`NumericRun`]: A file name split into `(prefix, digits, suffix)`
//!
//! # Numeric Run Rule
//! The file name is split into stem and extension at the last `.` that is not
//! the first character. The numeric run is the last maximal run of ASCII digits
//! in the stem. Everything before it is the prefix, everything after it
//! (including the extension) is the suffix:
//!
//! ```text
//! shot2_v3_0001.exr  ->  ("shot2_v3_", "0001", ".exr")
//! frame.0042.dpx     ->  ("frame.", "0042", ".dpx")
//! logo.png           ->  no run
//! ```

use crate::core::error::{Result, SeqMonError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A file name split around its frame number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NumericRun {
    pub prefix: String,
    pub digits: String,
    pub suffix: String,
    pub value: u64,
}

impl NumericRun {
    /// Split `basename` around the last digit run of its stem.
    ///
    /// Returns `None` when the stem has no digits, or when the run's value
    /// does not fit in a `u64`.
    pub fn parse(basename: &str) -> Option<NumericRun> {
        let stem_end = match basename.rfind('.') {
            Some(dot) if dot > 0 => dot,
            _ => basename.len(),
        };
        let stem = &basename[..stem_end];

        let bytes = stem.as_bytes();
        let end = bytes.iter().rposition(u8::is_ascii_digit)? + 1;
        let start = bytes[..end]
            .iter()
            .rposition(|b| !b.is_ascii_digit())
            .map_or(0, |i| i + 1);

        let digits = &stem[start..end];
        let value = digits.parse::<u64>().ok()?;

        Some(NumericRun {
            prefix: stem[..start].to_string(),
            digits: digits.to_string(),
            suffix: basename[end..].to_string(),
            value,
        })
    }

    /// Textual width of the digit run
    pub fn width(&self) -> usize {
        self.digits.len()
    }

    /// Whether the digit run carries a leading zero (`007`, not `0` or `7`)
    pub fn is_zero_padded(&self) -> bool {
        self.digits.len() > 1 && self.digits.starts_with('0')
    }
}

/// One file as observed at a point in time. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CachedImage {
    path: PathBuf,
    basename: String,
    run: Option<NumericRun>,
    size: u64,
    modified: SystemTime,
}

impl CachedImage {
    /// Build an image from a path and the metadata observed for it.
    ///
    /// Fails fast on paths the engine cannot key on: an empty path, a path
    /// without a final component, or a file name that is not valid UTF-8.
    pub fn new(path: impl Into<PathBuf>, size: u64, modified: SystemTime) -> Result<Self> {
        let path = path.into();
        let basename = basename_of(&path)?.to_string();
        let run = NumericRun::parse(&basename);

        Ok(Self {
            path,
            basename,
            run,
            size,
            modified,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// The parsed numeric run, if the file name has one
    pub fn run(&self) -> Option<&NumericRun> {
        self.run.as_ref()
    }

    /// Frame number carried by the file name
    pub fn frame_number(&self) -> Option<u64> {
        self.run.as_ref().map(|run| run.value)
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }
}

/// Validated final path component, used as the engine's parse input
pub(crate) fn basename_of(path: &Path) -> Result<&str> {
    if path.as_os_str().is_empty() {
        return Err(SeqMonError::EmptyPath);
    }
    let name = path
        .file_name()
        .ok_or_else(|| SeqMonError::missing_file_name(path))?;
    name.to_str()
        .ok_or_else(|| SeqMonError::invalid_utf8_path(path))
}
