//! # Configuration Module
//!
//! This module defines the resolved configuration a header run operates on,
//! and the optional `.headstamp.toml` file it can be loaded from.
//!
//! A [`Config`] is assembled once per invocation — from defaults, an optional
//! config file, and CLI overrides — via [`ConfigBuilder`], and is read-only
//! thereafter. Every component of the pipeline borrows the same resolved
//! value; nothing mutates it after resolution.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;

use crate::verbose_log;

/// The default config file name, looked up in the project root.
pub const DEFAULT_CONFIG_FILENAME: &str = ".headstamp.toml";

/// Environment variable for specifying the config file path.
pub const CONFIG_ENV_VAR: &str = "HEADSTAMP_CONFIG";

/// The default header template path, relative to the project root.
pub const DEFAULT_HEADER_TEMPLATE: &str = "header.txt";

/// Newline sequence used when rendering the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
  /// Line Feed (`\n`)
  #[default]
  Lf,
  /// Carriage Return + Line Feed (`\r\n`)
  Crlf,
}

impl LineEnding {
  /// The literal character sequence for this line ending.
  pub const fn as_str(self) -> &'static str {
    match self {
      LineEnding::Lf => "\n",
      LineEnding::Crlf => "\r\n",
    }
  }
}

/// Resolved configuration for one header run.
///
/// Paths (`header_template`, `source_roots`) are interpreted relative to the
/// project root unless absolute. Exclude patterns always win over include
/// patterns for a given path.
#[derive(Debug, Clone)]
pub struct Config {
  /// Path to the header template file.
  pub header_template: PathBuf,

  /// Newline sequence used when rendering the header.
  pub line_ending: LineEnding,

  /// Number of blank lines following the closing comment delimiter.
  pub spacing_after_header: usize,

  /// Variable substitution values for `${name}` / `{{name}}` tokens.
  pub variables: BTreeMap<String, String>,

  /// Base directories to scan. Duplicates are tolerated; missing roots are
  /// skipped silently.
  pub source_roots: Vec<PathBuf>,

  /// Glob patterns selecting files to consider. Empty means match-all.
  pub include_patterns: Vec<String>,

  /// Glob patterns for files to always skip. Empty means exclude nothing.
  pub exclude_patterns: Vec<String>,
}

impl Default for Config {
  fn default() -> Self {
    ConfigBuilder::new().build()
  }
}

impl Config {
  /// Start building a configuration from the defaults.
  pub fn builder() -> ConfigBuilder {
    ConfigBuilder::new()
  }
}

/// Builder assembling an immutable [`Config`].
///
/// Repeatable setters (`variable`, `source_root`, `include`, `exclude`)
/// accumulate; the first explicit `source_root` call drops the default
/// `src` root.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
  header_template: Option<PathBuf>,
  line_ending: Option<LineEnding>,
  spacing_after_header: Option<usize>,
  variables: BTreeMap<String, String>,
  source_roots: Option<Vec<PathBuf>>,
  include_patterns: Vec<String>,
  exclude_patterns: Vec<String>,
}

impl ConfigBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the header template path.
  pub fn header_template(mut self, path: impl Into<PathBuf>) -> Self {
    self.header_template = Some(path.into());
    self
  }

  /// Set the newline sequence used when rendering.
  pub fn line_ending(mut self, ending: LineEnding) -> Self {
    self.line_ending = Some(ending);
    self
  }

  /// Set the number of blank lines after the closing delimiter.
  pub fn spacing_after_header(mut self, spacing: usize) -> Self {
    self.spacing_after_header = Some(spacing);
    self
  }

  /// Add one substitution variable. A later value for the same key wins.
  pub fn variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.variables.insert(key.into(), value.into());
    self
  }

  /// Add a directory to scan. The first explicit root replaces the default.
  pub fn source_root(mut self, root: impl Into<PathBuf>) -> Self {
    self.source_roots.get_or_insert_with(Vec::new).push(root.into());
    self
  }

  /// Add an include pattern.
  pub fn include(mut self, pattern: impl Into<String>) -> Self {
    self.include_patterns.push(pattern.into());
    self
  }

  /// Add an exclude pattern.
  pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
    self.exclude_patterns.push(pattern.into());
    self
  }

  /// Layer the values of a parsed config file under any explicit settings.
  ///
  /// File-provided scalars only apply where nothing was set yet; variables
  /// and patterns accumulate (already-set keys keep their value).
  pub fn apply_file(mut self, file: ConfigFile) -> Self {
    if self.header_template.is_none() {
      self.header_template = file.header.map(PathBuf::from);
    }
    if self.line_ending.is_none() {
      self.line_ending = file.line_ending;
    }
    if self.spacing_after_header.is_none() {
      self.spacing_after_header = file.spacing_after_header;
    }
    for (key, value) in file.variables {
      self.variables.entry(key).or_insert(value);
    }
    if self.source_roots.is_none() && !file.source_roots.is_empty() {
      self.source_roots = Some(file.source_roots.into_iter().map(PathBuf::from).collect());
    }
    self.include_patterns.extend(file.include);
    self.exclude_patterns.extend(file.exclude);
    self
  }

  /// Resolve the final, immutable configuration.
  pub fn build(self) -> Config {
    Config {
      header_template: self
        .header_template
        .unwrap_or_else(|| PathBuf::from(DEFAULT_HEADER_TEMPLATE)),
      line_ending: self.line_ending.unwrap_or_default(),
      spacing_after_header: self.spacing_after_header.unwrap_or(1),
      variables: self.variables,
      source_roots: self.source_roots.unwrap_or_else(|| vec![PathBuf::from("src")]),
      include_patterns: self.include_patterns,
      exclude_patterns: self.exclude_patterns,
    }
  }
}

/// On-disk configuration, deserialized from `.headstamp.toml`.
///
/// All keys are optional; absent keys fall back to defaults or CLI values.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
  /// Path to the header template, relative to the project root.
  #[serde(default)]
  pub header: Option<String>,

  /// Newline sequence used when rendering (`lf` or `crlf`).
  #[serde(default, rename = "line-ending")]
  pub line_ending: Option<LineEnding>,

  /// Blank lines inserted after the closing comment delimiter.
  #[serde(default, rename = "spacing-after-header")]
  pub spacing_after_header: Option<usize>,

  /// Variable substitution values.
  #[serde(default)]
  pub variables: BTreeMap<String, String>,

  /// Directories to scan, relative to the project root.
  #[serde(default, rename = "source-roots")]
  pub source_roots: Vec<String>,

  /// Include patterns (empty = all files).
  #[serde(default)]
  pub include: Vec<String>,

  /// Exclude patterns (empty = exclude nothing).
  #[serde(default)]
  pub exclude: Vec<String>,
}

/// Error type for configuration file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  Read { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  Parse { path: PathBuf, source: toml::de::Error },
}

impl ConfigFile {
  /// Load a config file from an explicit path.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
      path: path.to_path_buf(),
      source: e,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
      path: path.to_path_buf(),
      source: e,
    })
  }
}

/// Locate and load the config file for a run.
///
/// Resolution order: explicit `--config` path, then the `HEADSTAMP_CONFIG`
/// environment variable, then `.headstamp.toml` in the project root. An
/// explicitly named file that is missing is an error; an absent default file
/// is not.
pub fn load_config(explicit_path: Option<&Path>, project_root: &Path) -> Result<Option<ConfigFile>, ConfigError> {
  if let Some(path) = explicit_path {
    return ConfigFile::load(path).map(Some);
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    return ConfigFile::load(Path::new(&env_path)).map(Some);
  }

  let default_path = project_root.join(DEFAULT_CONFIG_FILENAME);
  if default_path.is_file() {
    return ConfigFile::load(&default_path).map(Some);
  }

  Ok(None)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builder_defaults() {
    let config = Config::builder().build();

    assert_eq!(config.header_template, PathBuf::from("header.txt"));
    assert_eq!(config.line_ending, LineEnding::Lf);
    assert_eq!(config.spacing_after_header, 1);
    assert!(config.variables.is_empty());
    assert_eq!(config.source_roots, vec![PathBuf::from("src")]);
    assert!(config.include_patterns.is_empty());
    assert!(config.exclude_patterns.is_empty());
  }

  #[test]
  fn builder_explicit_root_replaces_default() {
    let config = Config::builder().source_root("lib").source_root("tests").build();
    assert_eq!(config.source_roots, vec![PathBuf::from("lib"), PathBuf::from("tests")]);
  }

  #[test]
  fn builder_later_variable_wins() {
    let config = Config::builder()
      .variable("year", "2020")
      .variable("year", "2026")
      .build();
    assert_eq!(config.variables.get("year").map(String::as_str), Some("2026"));
  }

  #[test]
  fn file_values_fill_unset_fields_only() {
    let file = ConfigFile {
      header: Some("notice.txt".to_string()),
      line_ending: Some(LineEnding::Crlf),
      spacing_after_header: Some(3),
      ..ConfigFile::default()
    };

    let config = Config::builder()
      .spacing_after_header(0) // explicit setting beats the file
      .apply_file(file)
      .build();

    assert_eq!(config.header_template, PathBuf::from("notice.txt"));
    assert_eq!(config.line_ending, LineEnding::Crlf);
    assert_eq!(config.spacing_after_header, 0);
  }

  #[test]
  fn parse_config_file() {
    let file: ConfigFile = toml::from_str(
      r#"
        header = "notice.txt"
        line-ending = "crlf"
        spacing-after-header = 2
        source-roots = ["src/main", "src/test"]
        include = ["*.kt"]
        exclude = ["*generated*"]

        [variables]
        year = "2026"
        author = "Ada"
      "#,
    )
    .expect("config should parse");

    assert_eq!(file.header.as_deref(), Some("notice.txt"));
    assert_eq!(file.line_ending, Some(LineEnding::Crlf));
    assert_eq!(file.spacing_after_header, Some(2));
    assert_eq!(file.source_roots, vec!["src/main", "src/test"]);
    assert_eq!(file.include, vec!["*.kt"]);
    assert_eq!(file.exclude, vec!["*generated*"]);
    assert_eq!(file.variables.get("year").map(String::as_str), Some("2026"));
    assert_eq!(file.variables.get("author").map(String::as_str), Some("Ada"));
  }

  #[test]
  fn unknown_config_key_is_rejected() {
    let result: Result<ConfigFile, _> = toml::from_str("headerr = \"typo.txt\"");
    assert!(result.is_err());
  }

  #[test]
  fn line_ending_sequences() {
    assert_eq!(LineEnding::Lf.as_str(), "\n");
    assert_eq!(LineEnding::Crlf.as_str(), "\r\n");
  }
}
