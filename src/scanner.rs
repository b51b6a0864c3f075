//! # Scanner Module
//!
//! This module walks the configured source roots and yields the candidate
//! files a run operates on, filtered through the scope patterns.
//!
//! Each invocation is a fresh scan — no state is cached across runs. The
//! ordering is stable within a run (depth-first, lexicographic within a
//! directory) so reports are reproducible.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::Config;
use crate::pattern::{self, PatternSet};

/// A candidate file yielded by the scanner.
///
/// Carries both the on-disk path used for I/O and the `/`-normalized
/// project-relative path used for pattern evaluation and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
  /// Path used to read and write the file.
  pub path: PathBuf,
  /// Path relative to the project root, `/`-separated.
  pub relative: String,
}

/// Scan the configured source roots for in-scope files.
///
/// Roots are resolved against the project root; roots that do not exist are
/// skipped silently (a missing source set is not an error). Duplicate roots
/// are tolerated — each file is yielded at most once, in first-seen order.
///
/// # Errors
///
/// Returns an error if a directory entry cannot be read during traversal.
pub fn scan(config: &Config, project_root: &Path) -> Result<Vec<FileEntry>> {
  let patterns = PatternSet::compile(&config.include_patterns, &config.exclude_patterns)?;

  let mut entries = Vec::new();
  let mut seen: HashSet<PathBuf> = HashSet::new();

  for root in &config.source_roots {
    let root = resolve_root(root, project_root);
    if !root.is_dir() {
      debug!("Skipping missing source root: {}", root.display());
      continue;
    }

    for entry in WalkDir::new(&root).sort_by_file_name() {
      let entry = entry.with_context(|| format!("Failed to scan directory: {}", root.display()))?;
      if !entry.file_type().is_file() {
        continue;
      }

      let path = entry.into_path();
      if !seen.insert(path.clone()) {
        continue;
      }

      let relative = relative_to_project_root(&path, project_root);
      if patterns.in_scope(&relative) {
        entries.push(FileEntry { path, relative });
      }
    }
  }

  debug!("Scan yielded {} in-scope files", entries.len());

  Ok(entries)
}

fn resolve_root(root: &Path, project_root: &Path) -> PathBuf {
  if root.is_absolute() {
    root.to_path_buf()
  } else {
    project_root.join(root)
  }
}

/// Compute the `/`-normalized path of `path` relative to the project root.
///
/// Patterns are always evaluated against the project root, not the source
/// root the file was found under. Falls back to the path as given when no
/// relative form exists (e.g. different drive on Windows).
fn relative_to_project_root(path: &Path, project_root: &Path) -> String {
  match pathdiff::diff_paths(path, project_root) {
    Some(relative) => pattern::normalize_separators(&relative),
    None => pattern::normalize_separators(path),
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::*;
  use crate::config::Config;

  fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, "fn main() {}\n").expect("write file");
  }

  #[test]
  fn scan_yields_files_relative_to_project_root() {
    let dir = tempdir().expect("tempdir");
    touch(&dir.path().join("src/main/App.kt"));
    touch(&dir.path().join("src/main/util/Strings.kt"));

    let config = Config::builder().source_root("src/main").build();
    let entries = scan(&config, dir.path()).expect("scan succeeds");

    let relative: Vec<&str> = entries.iter().map(|e| e.relative.as_str()).collect();
    assert_eq!(relative, vec!["src/main/App.kt", "src/main/util/Strings.kt"]);
  }

  #[test]
  fn missing_root_is_skipped_silently() {
    let dir = tempdir().expect("tempdir");
    touch(&dir.path().join("src/lib.rs"));

    let config = Config::builder().source_root("src").source_root("does-not-exist").build();
    let entries = scan(&config, dir.path()).expect("scan succeeds");

    assert_eq!(entries.len(), 1);
  }

  #[test]
  fn duplicate_roots_yield_each_file_once() {
    let dir = tempdir().expect("tempdir");
    touch(&dir.path().join("src/lib.rs"));

    let config = Config::builder().source_root("src").source_root("src").build();
    let entries = scan(&config, dir.path()).expect("scan succeeds");

    assert_eq!(entries.len(), 1);
  }

  #[test]
  fn directories_are_never_yielded() {
    let dir = tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("src/empty")).expect("create dirs");
    touch(&dir.path().join("src/lib.rs"));

    let config = Config::default();
    let entries = scan(&config, dir.path()).expect("scan succeeds");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].relative, "src/lib.rs");
  }

  #[test]
  fn patterns_filter_scanned_files() {
    let dir = tempdir().expect("tempdir");
    touch(&dir.path().join("src/App.kt"));
    touch(&dir.path().join("src/data.json"));
    touch(&dir.path().join("src/deep/Model.kt"));

    let config = Config::builder().include("*.kt").build();
    let entries = scan(&config, dir.path()).expect("scan succeeds");

    let relative: Vec<&str> = entries.iter().map(|e| e.relative.as_str()).collect();
    assert_eq!(relative, vec!["src/App.kt", "src/deep/Model.kt"]);
  }

  #[test]
  fn ordering_is_lexicographic_within_a_directory() {
    let dir = tempdir().expect("tempdir");
    touch(&dir.path().join("src/b.rs"));
    touch(&dir.path().join("src/a.rs"));
    touch(&dir.path().join("src/c.rs"));

    let config = Config::default();
    let entries = scan(&config, dir.path()).expect("scan succeeds");

    let relative: Vec<&str> = entries.iter().map(|e| e.relative.as_str()).collect();
    assert_eq!(relative, vec!["src/a.rs", "src/b.rs", "src/c.rs"]);
  }
}
