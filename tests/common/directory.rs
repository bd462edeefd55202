//! Temporary directory management for tests
//!
//! Every test gets its own image directory and its own config directory, so
//! a user's real seqmon config never leaks into a run.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Image directory plus an isolated config home. Both `TempDir`s must be
/// kept alive for the duration of the test.
pub struct TestDir {
    pub temp_dir: TempDir,
    pub config_home: TempDir,
    pub path: PathBuf,
}

impl TestDir {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where `seqmon config --init` writes inside the isolated config home
    pub fn config_file(&self) -> PathBuf {
        self.config_home.path().join("seqmon").join("config.json")
    }

    /// `seqmon` command pointed at this test's config home, colors off
    pub fn command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("seqmon")?;
        cmd.env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        Ok(cmd)
    }

    pub fn write_config(&self, json: &str) -> anyhow::Result<()> {
        let file = self.config_file();
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(file, json)?;
        Ok(())
    }
}

pub fn setup_test_dir() -> anyhow::Result<TestDir> {
    let temp_dir = TempDir::new()?;
    let config_home = TempDir::new()?;
    let path = temp_dir.path().to_path_buf();
    Ok(TestDir {
        temp_dir,
        config_home,
        path,
    })
}

/// Creates empty-ish files with the given names, parent directories included
pub fn create_files(dir: &Path, names: &[&str]) -> anyhow::Result<()> {
    for name in names {
        create_file(dir, name, "frame data")?;
    }
    Ok(())
}

pub fn create_file(dir: &Path, name: &str, content: &str) -> anyhow::Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
