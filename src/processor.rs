//! # Processor Module
//!
//! This module composes the pipeline — render once, scan once, then a
//! sequential per-file loop — into the two user-facing operations:
//!
//! - [`Processor::check`]: read-only; collects a [`Violation`] for every
//!   in-scope file whose content does not start with the rendered header.
//! - [`Processor::update`]: rewrites every invalid file in place and counts
//!   the changes. Running update twice in a row changes nothing the second
//!   time.
//!
//! Both operations fail fast on a missing header template, before any
//! scanning — without a template, "valid header" is undefined. A file that
//! cannot be read or written aborts the whole run; files already rewritten
//! before the failure remain on disk (update is not transactional across the
//! file set).

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::Config;
use crate::diff::DiffManager;
use crate::report::{Report, Violation};
use crate::scanner::FileEntry;
use crate::{detector, renderer, rewrite, scanner, verbose_log};

/// Orchestrator for the check and update operations.
pub struct Processor {
  /// Resolved configuration, read-only for the lifetime of the run.
  config: Config,

  /// Directory all relative paths are resolved against.
  project_root: PathBuf,

  /// Optional rewrite preview rendering (check mode only).
  diff_manager: Option<DiffManager>,
}

impl Processor {
  /// Create a processor over a resolved configuration.
  pub const fn new(config: Config, project_root: PathBuf) -> Self {
    Self {
      config,
      project_root,
      diff_manager: None,
    }
  }

  /// Attach a diff manager rendering previews of what update would change.
  pub fn with_diff_manager(mut self, diff_manager: DiffManager) -> Self {
    self.diff_manager = Some(diff_manager);
    self
  }

  /// Verify headers without modifying any file.
  ///
  /// Violations are recorded in scan order. The caller decides how to
  /// surface them (listing, exit code, report file).
  pub fn check(&self) -> Result<Report> {
    let started = Instant::now();
    let (header, files) = self.prepare()?;

    let mut violations = Vec::new();
    for entry in &files {
      let content = read_file(&entry.path)?;
      if detector::has_valid_header(&content, &header) {
        continue;
      }

      verbose_log!("Missing or incorrect header: {}", entry.relative);
      if let Some(ref diff_manager) = self.diff_manager {
        let rewritten = rewrite::apply(&content, &header);
        diff_manager.preview(Path::new(&entry.relative), &content, &rewritten)?;
      }
      violations.push(Violation {
        path: entry.relative.clone(),
      });
    }

    Ok(Report::check(files.len(), violations, started.elapsed()))
  }

  /// Stamp the rendered header into every invalid file, in place.
  ///
  /// Valid files are left untouched, so the operation is idempotent: a
  /// second run over the same tree rewrites nothing.
  pub fn update(&self) -> Result<Report> {
    let started = Instant::now();
    let (header, files) = self.prepare()?;

    let mut files_changed = 0;
    for entry in &files {
      let content = read_file(&entry.path)?;
      if detector::has_valid_header(&content, &header) {
        continue;
      }

      let rewritten = rewrite::apply(&content, &header);
      std::fs::write(&entry.path, &rewritten).with_context(|| format!("Failed to write file: {}", entry.path.display()))?;
      verbose_log!("Header written to: {}", entry.relative);
      files_changed += 1;
    }

    Ok(Report::update(files.len(), files_changed, started.elapsed()))
  }

  /// Render the canonical header and scan for in-scope files.
  ///
  /// Rendering comes first so a missing template aborts before any file is
  /// inspected; the rendered string is shared by every per-file comparison
  /// in the run.
  fn prepare(&self) -> Result<(String, Vec<FileEntry>)> {
    let header = renderer::render(&self.config, &self.project_root)?;
    let files = scanner::scan(&self.config, &self.project_root)?;
    debug!("Prepared run: {} candidate files", files.len());
    Ok((header, files))
  }
}

fn read_file(path: &Path) -> Result<String> {
  std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
