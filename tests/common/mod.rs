#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// A throwaway project tree for header runs.
///
/// Holds the tempdir alive for the duration of the test and offers small
/// helpers for laying out files under it.
pub struct ProjectFixture {
  dir: TempDir,
}

impl ProjectFixture {
  /// Create an empty project fixture.
  pub fn new() -> Result<Self> {
    Ok(Self {
      dir: tempfile::tempdir().context("Failed to create temp project")?,
    })
  }

  /// Create a fixture with a header template already in place.
  pub fn with_header(template: &str) -> Result<Self> {
    let fixture = Self::new()?;
    fixture.write("header.txt", template)?;
    Ok(fixture)
  }

  /// The project root path.
  pub fn root(&self) -> &Path {
    self.dir.path()
  }

  /// Write a file under the project root, creating parent directories.
  pub fn write(&self, relative: &str, content: &str) -> Result<PathBuf> {
    let path = self.dir.path().join(relative);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
  }

  /// Read a file back from under the project root.
  pub fn read(&self, relative: &str) -> Result<String> {
    let path = self.dir.path().join(relative);
    fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
  }
}
