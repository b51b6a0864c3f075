//! # Rewrite Module
//!
//! This module produces the new content for a file that failed header
//! detection: any pre-existing leading block comment is stripped and the
//! rendered header is prepended.
//!
//! Replacement is total — the old leading comment is removed wholesale, with
//! no attempt to merge or preserve parts of a stale header. Text someone
//! appended inside the official notice's comment block is lost on rewrite.
//! This is a deliberate, documented policy of the tool.

use std::sync::LazyLock;

use regex::Regex;

/// A leading block comment: optional leading whitespace, `/*`, lazily
/// anything up to the first `*/`, then any trailing whitespace.
static LEADING_BLOCK_COMMENT: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?s)^\s*/\*.*?\*/\s*").expect("leading comment regex must compile"));

/// Strip a leading `/* ... */` block comment, including the whitespace
/// around it. Content without such a comment (or with an unterminated one)
/// is returned unchanged.
pub fn strip_leading_block_comment(content: &str) -> &str {
  match LEADING_BLOCK_COMMENT.find(content) {
    Some(found) => &content[found.end()..],
    None => content,
  }
}

/// Build the rewritten content for an invalid file: the rendered header
/// followed by the content with any old leading block comment removed.
///
/// The remainder after the old comment is preserved byte-for-byte.
pub fn apply(content: &str, header: &str) -> String {
  let mut out = String::with_capacity(header.len() + content.len());
  out.push_str(header);
  out.push_str(strip_leading_block_comment(content));
  out
}
