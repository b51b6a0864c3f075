//! # Detector Module
//!
//! This module decides whether a file's content already carries the rendered
//! header.
//!
//! Detection is a prefix comparison after newline canonicalization: both the
//! file content and the rendered header have every `\r?\n` collapsed to `\n`,
//! so a CRLF-rendered header matches an LF-saved file with equivalent
//! content. Beyond that the match is exact — case-sensitive and
//! whitespace-sensitive. There is no semantic comparison (a header with a
//! stale year is simply invalid).

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").expect("newline regex must compile"));

/// Collapse every `\r?\n` sequence to a single `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
  NEWLINES.replace_all(text, "\n")
}

/// Whether `content` starts with the rendered `header`, modulo newline
/// canonicalization on both sides.
pub fn has_valid_header(content: &str, header: &str) -> bool {
  normalize_newlines(content).starts_with(normalize_newlines(header).as_ref())
}

#[cfg(test)]
mod tests {
  use super::*;

  const HEADER: &str = "/*\n * Copyright 2026 Ada\n */\n\n";

  #[test]
  fn exact_prefix_is_valid() {
    let content = format!("{HEADER}fn main() {{}}\n");
    assert!(has_valid_header(&content, HEADER));
  }

  #[test]
  fn missing_header_is_invalid() {
    assert!(!has_valid_header("fn main() {}\n", HEADER));
  }

  #[test]
  fn differing_header_text_is_invalid() {
    let content = "/*\n * Copyright 2020 Ada\n */\n\nfn main() {}\n";
    assert!(!has_valid_header(content, HEADER));
  }

  #[test]
  fn crlf_content_matches_lf_header() {
    let content = "/*\r\n * Copyright 2026 Ada\r\n */\r\n\r\nfn main() {}\r\n";
    assert!(has_valid_header(content, HEADER));
  }

  #[test]
  fn lf_content_matches_crlf_header() {
    let crlf_header = "/*\r\n * Copyright 2026 Ada\r\n */\r\n\r\n";
    let content = format!("{HEADER}fn main() {{}}\n");
    assert!(has_valid_header(&content, crlf_header));
  }

  #[test]
  fn comparison_is_case_sensitive() {
    let content = "/*\n * COPYRIGHT 2026 ADA\n */\n\nfn main() {}\n";
    assert!(!has_valid_header(content, HEADER));
  }

  #[test]
  fn header_alone_is_valid() {
    assert!(has_valid_header(HEADER, HEADER));
  }
}
