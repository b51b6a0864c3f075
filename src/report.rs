//! # Report Module
//!
//! This module defines the result types a run produces: the per-file
//! [`Violation`] records and the aggregate [`Report`], plus JSON export for
//! machine consumers (CI annotations, dashboards).
//!
//! A `Report` is assembled once by the processor and immutable afterwards.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

/// The operation a report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
  /// Read-only verification.
  Check,
  /// In-place stamping.
  Update,
}

/// A file whose header is missing or incorrect.
///
/// The path is relative to the project root, `/`-separated, exactly as it
/// was evaluated against the scope patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
  /// Project-relative path of the offending file.
  pub path: String,
}

/// Aggregate result of one run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
  /// Which operation produced this report.
  pub operation: Operation,

  /// Number of in-scope files the scan yielded.
  pub files_scanned: usize,

  /// Number of files rewritten (always zero for check).
  pub files_changed: usize,

  /// Files flagged as missing/incorrect, in scan order.
  pub violations: Vec<Violation>,

  /// Total processing time.
  #[serde(skip_serializing)]
  pub processing_time: Duration,

  /// Processing time in seconds, for serialization.
  #[serde(rename = "processing_time_seconds")]
  pub processing_time_secs: f64,

  /// Unix timestamp of when the report was produced.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub timestamp: Option<i64>,
}

impl Report {
  /// Build a check report from the collected violations.
  pub fn check(files_scanned: usize, violations: Vec<Violation>, processing_time: Duration) -> Self {
    Self {
      operation: Operation::Check,
      files_scanned,
      files_changed: 0,
      violations,
      processing_time,
      processing_time_secs: processing_time.as_secs_f64(),
      timestamp: Some(Local::now().timestamp()),
    }
  }

  /// Build an update report from the rewrite count.
  pub fn update(files_scanned: usize, files_changed: usize, processing_time: Duration) -> Self {
    Self {
      operation: Operation::Update,
      files_scanned,
      files_changed,
      violations: Vec::new(),
      processing_time,
      processing_time_secs: processing_time.as_secs_f64(),
      timestamp: Some(Local::now().timestamp()),
    }
  }

  /// Whether the run found every file compliant and touched nothing.
  pub fn is_clean(&self) -> bool {
    self.violations.is_empty() && self.files_changed == 0
  }

  /// Whether the scan yielded no files at all.
  pub const fn nothing_to_do(&self) -> bool {
    self.files_scanned == 0
  }

  /// Write this report as pretty-printed JSON.
  pub fn save_json(&self, output_path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(self).context("Failed to serialize report")?;
    std::fs::write(output_path, content)
      .with_context(|| format!("Failed to write report to {}", output_path.display()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn check_report_counts() {
    let violations = vec![Violation {
      path: "src/main.rs".to_string(),
    }];
    let report = Report::check(3, violations, Duration::from_millis(12));

    assert_eq!(report.operation, Operation::Check);
    assert_eq!(report.files_scanned, 3);
    assert_eq!(report.files_changed, 0);
    assert!(!report.is_clean());
    assert!(!report.nothing_to_do());
  }

  #[test]
  fn update_report_is_clean_when_nothing_changed() {
    let report = Report::update(3, 0, Duration::from_millis(5));
    assert!(report.is_clean());

    let report = Report::update(3, 2, Duration::from_millis(5));
    assert!(!report.is_clean());
  }

  #[test]
  fn empty_scan_is_nothing_to_do() {
    let report = Report::update(0, 0, Duration::ZERO);
    assert!(report.nothing_to_do());
    assert!(report.is_clean());
  }

  #[test]
  fn json_round_trips_expected_fields() {
    let violations = vec![Violation {
      path: "src/a.kt".to_string(),
    }];
    let report = Report::check(2, violations, Duration::from_secs(1));

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["operation"], "check");
    assert_eq!(json["files_scanned"], 2);
    assert_eq!(json["violations"][0]["path"], "src/a.kt");
    assert!(json["processing_time_seconds"].is_number());
  }
}
