//! # Diff Module
//!
//! This module renders line diffs showing what an update would change,
//! without modifying anything. Used by `check --show-diff` / `--save-diff`
//! to preview the rewrite before opting into it.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use similar::{ChangeTag, TextDiff};

/// Renders rewrite previews to stderr and/or a consolidated diff file.
pub struct DiffManager {
  /// Whether to print previews to stderr.
  show_diff: bool,

  /// File to append previews to. Previews for multiple files accumulate in
  /// the same file, producing one consolidated diff per run.
  save_diff_path: Option<PathBuf>,
}

impl DiffManager {
  pub const fn new(show_diff: bool, save_diff_path: Option<PathBuf>) -> Self {
    Self {
      show_diff,
      save_diff_path,
    }
  }

  /// Whether this manager would produce any output at all.
  pub const fn is_active(&self) -> bool {
    self.show_diff || self.save_diff_path.is_some()
  }

  /// Render the diff between a file's current content and its would-be
  /// rewritten content.
  pub fn preview(&self, path: &Path, original: &str, rewritten: &str) -> Result<()> {
    if !self.is_active() {
      return Ok(());
    }

    let diff = TextDiff::from_lines(original, rewritten);

    let mut rendered = format!("Diff for {}:\n", path.display());
    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      rendered.push_str(sign);
      rendered.push_str(change.value());
    }
    rendered.push('\n');

    if self.show_diff {
      eprint!("{rendered}");
    }

    if let Some(ref save_path) = self.save_diff_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(save_path)
        .with_context(|| format!("Failed to open diff file: {}", save_path.display()))?;
      file
        .write_all(rendered.as_bytes())
        .with_context(|| format!("Failed to write diff file: {}", save_path.display()))?;
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn inactive_manager_produces_nothing() {
    let manager = DiffManager::new(false, None);
    assert!(!manager.is_active());
    // No output targets; preview must still succeed.
    manager
      .preview(Path::new("a.rs"), "old\n", "new\n")
      .expect("preview succeeds");
  }

  #[test]
  fn saved_diff_accumulates_per_file_sections() {
    let dir = tempfile::tempdir().expect("tempdir");
    let diff_path = dir.path().join("changes.diff");

    let manager = DiffManager::new(false, Some(diff_path.clone()));
    manager
      .preview(Path::new("a.rs"), "body\n", "/* h */\nbody\n")
      .expect("preview succeeds");
    manager
      .preview(Path::new("b.rs"), "other\n", "/* h */\nother\n")
      .expect("preview succeeds");

    let saved = std::fs::read_to_string(&diff_path).expect("diff file exists");
    assert!(saved.contains("Diff for a.rs:"));
    assert!(saved.contains("Diff for b.rs:"));
    assert!(saved.contains("+/* h */"));
    assert!(saved.contains(" body"));
  }
}
