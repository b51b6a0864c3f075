//! # Renderer Module
//!
//! This module turns the header template into the canonical block-comment
//! string every file in a run is compared against and stamped with.
//!
//! Rendering happens exactly once per invocation: the template is read,
//! variables are substituted, and the result is wrapped as a `/* ... */`
//! block honoring the configured line ending and post-header spacing. The
//! rendered string is then shared read-only across all per-file checks, so
//! every file sees an identical header even when variable values (like a
//! current-year stamp) are resolved at invocation time.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::Config;

static LINE_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").expect("line split regex must compile"));

/// Error type for header rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
  /// The header template file does not exist or cannot be read.
  #[error("Header template not found or unreadable: '{path}': {source}")]
  HeaderSourceMissing { path: PathBuf, source: std::io::Error },
}

/// Render the configured header template into its final block-comment form.
///
/// The template path is resolved against the project root unless absolute.
///
/// # Errors
///
/// Returns [`RenderError::HeaderSourceMissing`] if the template file does not
/// exist or cannot be read. Callers fail fast on this before any scanning —
/// without a template, "valid header" is undefined.
pub fn render(config: &Config, project_root: &Path) -> Result<String, RenderError> {
  let path = if config.header_template.is_absolute() {
    config.header_template.clone()
  } else {
    project_root.join(&config.header_template)
  };

  debug!("Rendering header template: {}", path.display());

  let template = std::fs::read_to_string(&path).map_err(|source| RenderError::HeaderSourceMissing { path, source })?;

  let substituted = substitute_variables(&template, &config.variables);

  Ok(wrap_block_comment(
    substituted.trim(),
    config.line_ending.as_str(),
    config.spacing_after_header,
  ))
}

/// Substitute `${name}` and `{{name}}` tokens with their configured values.
///
/// The template is scanned left to right in a single pass: a token whose name
/// is a known variable is replaced by its value, and the inserted value is
/// never re-scanned — no recursive substitution. Tokens naming unknown
/// variables are left verbatim. There is no escape for a literal `${...}`.
pub fn substitute_variables(template: &str, variables: &BTreeMap<String, String>) -> String {
  let mut out = String::with_capacity(template.len());
  let mut rest = template;

  while !rest.is_empty() {
    if let Some((token_len, value)) = match_placeholder(rest, variables) {
      out.push_str(value);
      rest = &rest[token_len..];
    } else {
      let ch = rest.chars().next().expect("non-empty remainder has a first char");
      out.push(ch);
      rest = &rest[ch.len_utf8()..];
    }
  }

  out
}

/// Match a known-variable placeholder at the start of `rest`.
///
/// Returns the token length and the replacement value, or `None` when no
/// placeholder of either syntax with a known name starts here.
fn match_placeholder<'v>(rest: &str, variables: &'v BTreeMap<String, String>) -> Option<(usize, &'v str)> {
  for (open, close) in [("${", "}"), ("{{", "}}")] {
    if let Some(body) = rest.strip_prefix(open)
      && let Some(end) = body.find(close)
      && let Some(value) = variables.get(&body[..end])
    {
      return Some((open.len() + end + close.len(), value));
    }
  }
  None
}

/// Wrap substituted header content as a `/* ... */` block comment.
///
/// Content lines are prefixed with ` * ` (bare ` *` for blank lines); the
/// closing ` */` is followed by `spacing + 1` line-ending sequences — the
/// extra one terminates the closing-delimiter line itself.
fn wrap_block_comment(content: &str, line_ending: &str, spacing: usize) -> String {
  let mut out = String::new();

  out.push_str("/*");
  out.push_str(line_ending);
  for line in LINE_SPLIT.split(content) {
    if line.trim().is_empty() {
      out.push_str(" *");
    } else {
      out.push_str(" * ");
      out.push_str(line);
    }
    out.push_str(line_ending);
  }
  out.push_str(" */");
  for _ in 0..=spacing {
    out.push_str(line_ending);
  }

  out
}
