//! # Output Module
//!
//! This module centralizes all user-facing output for the headstamp tool.
//! It provides consistent formatting, colors, and symbols for terminal
//! output.
//!
//! ## Design Goals
//!
//! - **Informative**: Show actionable information without requiring flags
//! - **Scannable**: Use formatting to make output easy to parse visually
//! - **Progressive**: More detail with `-v`, silence with `-q`
//! - **Scriptable**: Keep stdout predictable for piping/automation

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::{Report, Violation};

/// Symbols used in output
pub mod symbols {
  /// Success/compliant
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Missing or incorrect header
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Maximum number of violations to show before truncating (verbose shows all)
const DEFAULT_VIOLATION_LIST_LIMIT: usize = 20;

/// Print the success summary for a clean check run.
pub fn print_check_passed(report: &Report) {
  if is_quiet() {
    return;
  }

  let files_word = if report.files_scanned == 1 { "file" } else { "files" };
  println!(
    "{} Header check passed for {} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    report.files_scanned,
    files_word
  );
}

/// Print the violation list for a failed check run.
///
/// Violations appear in scan order, paths relative to the project root. The
/// list is truncated after a fixed limit unless verbose mode is on; quiet
/// mode prints bare paths for scripting.
pub fn print_violations(violations: &[Violation]) {
  if violations.is_empty() {
    return;
  }

  if is_quiet() {
    for violation in violations {
      println!("{}", violation.path);
    }
    return;
  }

  let count = violations.len();
  let description = if count == 1 {
    "file is missing its header or carries an incorrect one:"
  } else {
    "files are missing their header or carry an incorrect one:"
  };
  println!(
    "{} {} {}",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    count,
    description
  );

  let limit = if is_verbose() { count } else { DEFAULT_VIOLATION_LIST_LIMIT };
  for violation in violations.iter().take(limit) {
    println!("  - {}", violation.path);
  }

  if count > limit {
    println!("  ... and {} more (use -v to see all)", count - limit);
  }
}

/// Print the summary for an update run that found files to process.
pub fn print_update_summary(report: &Report) {
  if is_quiet() {
    return;
  }

  if report.files_changed == 0 {
    let files_word = if report.files_scanned == 1 { "file" } else { "files" };
    println!(
      "{} {} {} checked, all carry a valid header",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      report.files_scanned,
      files_word
    );
  } else {
    let files_word = if report.files_changed == 1 { "file" } else { "files" };
    println!(
      "{} Header written to {} {}",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      report.files_changed,
      files_word
    );
  }
}

/// Print the summary for a run whose scan yielded no files at all.
pub fn print_nothing_to_do() {
  if !is_quiet() {
    println!("No files matched the configured patterns, nothing to do");
  }
}

/// Print an actionable hint below a failure listing.
pub fn print_hint(hint: &str) {
  if !is_quiet() {
    println!("{}", hint.if_supports_color(Stream::Stdout, |s| s.dimmed()));
  }
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}
