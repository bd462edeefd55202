//! Predefined directory scenarios
//!
//! Provides functions that lay out frame files the way render jobs and
//! scanners typically leave them.

#![allow(dead_code)]

use super::directory::*;

/// Scenario: one padded sequence, `frame_001.tga` through `frame_003.tga`
pub fn create_simple_sequence() -> anyhow::Result<TestDir> {
    let dir = setup_test_dir()?;
    create_files(
        dir.path(),
        &["frame_001.tga", "frame_002.tga", "frame_003.tga"],
    )?;
    Ok(dir)
}

/// Scenario: a sequence with gaps plus a file that is not a frame
pub fn create_gapped_sequence() -> anyhow::Result<TestDir> {
    let dir = setup_test_dir()?;
    create_files(
        dir.path(),
        &[
            "shot_0001.exr",
            "shot_0002.exr",
            "shot_0005.exr",
            "shot_0007.exr",
            "notes.txt",
        ],
    )?;
    Ok(dir)
}

/// Scenario: two sequences side by side that differ only in padding
pub fn create_mixed_padding() -> anyhow::Result<TestDir> {
    let dir = setup_test_dir()?;
    create_files(
        dir.path(),
        &["plate_01.png", "plate_02.png", "plate_1.png", "plate_2.png"],
    )?;
    Ok(dir)
}

/// Scenario: frames at the top level and inside a subdirectory
pub fn create_nested_sequences() -> anyhow::Result<TestDir> {
    let dir = setup_test_dir()?;
    create_files(
        dir.path(),
        &[
            "comp_001.exr",
            "comp_002.exr",
            "passes/beauty_0001.exr",
            "passes/beauty_0002.exr",
        ],
    )?;
    Ok(dir)
}
