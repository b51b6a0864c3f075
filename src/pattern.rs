//! # Pattern Module
//!
//! This module compiles the glob-like include/exclude patterns into
//! path-matching predicates.
//!
//! The pattern language is deliberately small and flat: `*` matches zero or
//! more of ANY character — including `/`, so a single `*` crosses directory
//! boundaries — `?` matches exactly one arbitrary character, and everything
//! else is literal. Patterns are matched against the whole project-relative
//! path (anchored at both ends), with `/` as the separator on every platform.
//! `**` therefore has no special meaning; it is just two consecutive
//! wildcards and behaves like one.

use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

/// A compiled scope pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
  raw: String,
  regex: Regex,
}

impl Pattern {
  /// Compile a pattern into a matching predicate.
  ///
  /// # Errors
  ///
  /// Returns an error if the translated expression exceeds the regex engine's
  /// size limits (practically unreachable for hand-written patterns).
  pub fn compile(pattern: &str) -> Result<Self> {
    let mut translated = String::with_capacity(pattern.len() + 8);
    translated.push('^');
    for ch in pattern.chars() {
      match ch {
        '*' => translated.push_str(".*"),
        '?' => translated.push('.'),
        _ => translated.push_str(&regex::escape(&ch.to_string())),
      }
    }
    translated.push('$');

    let regex = Regex::new(&translated).with_context(|| format!("Invalid scope pattern: {pattern}"))?;

    Ok(Self {
      raw: pattern.to_string(),
      regex,
    })
  }

  /// Test a project-relative path (already `/`-normalized) against this
  /// pattern. Full-string match, not substring containment.
  pub fn matches(&self, relative_path: &str) -> bool {
    self.regex.is_match(relative_path)
  }

  /// The pattern text this matcher was compiled from.
  pub fn as_str(&self) -> &str {
    &self.raw
  }
}

/// The include/exclude pattern pair scoping a run.
///
/// A path is in scope iff the include set is empty or any include matches,
/// AND no exclude matches. Exclude always wins.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
  includes: Vec<Pattern>,
  excludes: Vec<Pattern>,
}

impl PatternSet {
  /// Compile include and exclude patterns into a scope predicate.
  pub fn compile<S: AsRef<str>>(includes: &[S], excludes: &[S]) -> Result<Self> {
    Ok(Self {
      includes: includes.iter().map(|p| Pattern::compile(p.as_ref())).collect::<Result<Vec<_>>>()?,
      excludes: excludes.iter().map(|p| Pattern::compile(p.as_ref())).collect::<Result<Vec<_>>>()?,
    })
  }

  /// Whether a project-relative path is in scope for this run.
  pub fn in_scope(&self, relative_path: &str) -> bool {
    let included = self.includes.is_empty() || self.includes.iter().any(|p| p.matches(relative_path));
    let excluded = self.excludes.iter().any(|p| p.matches(relative_path));
    included && !excluded
  }
}

/// Normalize a path to the `/`-separated form patterns are matched against.
pub fn normalize_separators(path: &Path) -> String {
  let text = path.to_string_lossy();
  if text.contains('\\') {
    text.replace('\\', "/")
  } else {
    text.into_owned()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn star_crosses_directory_boundaries() {
    let pattern = Pattern::compile("*.kt").expect("pattern compiles");
    assert!(pattern.matches("Foo.kt"));
    assert!(pattern.matches("a/b/Foo.kt"));
    assert!(!pattern.matches("Foo.kts"));
  }

  #[test]
  fn dot_is_literal() {
    let pattern = Pattern::compile("*.rs").expect("pattern compiles");
    assert!(pattern.matches("main.rs"));
    assert!(!pattern.matches("main_rs"));
  }

  #[test]
  fn question_mark_matches_one_character() {
    let pattern = Pattern::compile("Day?.kt").expect("pattern compiles");
    assert!(pattern.matches("Day1.kt"));
    assert!(pattern.matches("DayX.kt"));
    assert!(!pattern.matches("Day.kt"));
    assert!(!pattern.matches("Day12.kt"));
  }

  #[test]
  fn match_is_anchored_not_substring() {
    let pattern = Pattern::compile("main").expect("pattern compiles");
    assert!(pattern.matches("main"));
    assert!(!pattern.matches("src/main.rs"));
    assert!(!pattern.matches("mainframe"));
  }

  #[test]
  fn double_star_behaves_like_single_star() {
    let single = Pattern::compile("src/main/*").expect("pattern compiles");
    let double = Pattern::compile("src/main/**").expect("pattern compiles");

    for path in ["src/main/App.kt", "src/main/a/b/App.kt", "src/main/"] {
      assert_eq!(single.matches(path), double.matches(path), "diverged on {path}");
    }
    assert!(!double.matches("src/test/App.kt"));
  }

  #[test]
  fn regex_metacharacters_are_literal() {
    let pattern = Pattern::compile("a+b/[x].txt").expect("pattern compiles");
    assert!(pattern.matches("a+b/[x].txt"));
    assert!(!pattern.matches("ab/x.txt"));
  }

  #[test]
  fn empty_includes_match_all() {
    let set = PatternSet::compile::<&str>(&[], &[]).expect("set compiles");
    assert!(set.in_scope("anything/at/all.zig"));
  }

  #[test]
  fn exclude_wins_over_include() {
    let set = PatternSet::compile(&["*.kt"], &["*Test*"]).expect("set compiles");
    assert!(set.in_scope("src/main/App.kt"));
    assert!(!set.in_scope("src/test/AppTest.kt"));
  }

  #[test]
  fn exclude_applies_without_includes() {
    let set = PatternSet::compile(&[], &["*.json"]).expect("set compiles");
    assert!(set.in_scope("src/main.rs"));
    assert!(!set.in_scope("config/settings.json"));
  }

  #[test]
  fn normalize_backslashes() {
    assert_eq!(normalize_separators(Path::new("a\\b\\c.kt")), "a/b/c.kt");
    assert_eq!(normalize_separators(Path::new("a/b/c.kt")), "a/b/c.kt");
  }
}
