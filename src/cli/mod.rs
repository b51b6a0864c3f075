//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing, with one subcommand per operation.

mod check;
mod update;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
pub use check::{CheckArgs, run_check};
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Args, Parser, Subcommand};
pub use update::{UpdateArgs, run_update};

use crate::config::{Config, LineEnding, load_config};
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Verify headers in ./src against ./header.txt
  headstamp check

  # Stamp headers in place, with a substituted year
  headstamp update --var year=2026

  # Verify a specific project with custom roots and scope
  headstamp check /path/to/project --root src/main --root src/test --include '*.kt'

  # Exclude generated files (exclude always wins over include)
  headstamp update --include '*.kt' --exclude '*generated*'

  # Render with Windows line endings and two blank lines after the header
  headstamp update --line-ending crlf --spacing 2

  # Preview what update would change, without touching files
  headstamp check --show-diff

  # Save a machine-readable result
  headstamp check --report-json headers.json
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
  /// Verify headers without modifying files; fails listing non-compliant
  /// paths
  Check(CheckArgs),
  /// Insert or replace headers in place and report the number of files
  /// changed
  Update(UpdateArgs),
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Dispatch to the selected operation.
  pub fn run(self) -> Result<()> {
    match self.command {
      Command::Check(args) => run_check(args),
      Command::Update(args) => run_update(args),
    }
  }
}

/// Arguments shared by both operations.
#[derive(Args, Debug, Default)]
pub struct CommonArgs {
  /// Project root; the header template, source roots, and reported paths are
  /// all resolved against it
  #[arg(value_name = "ROOT", default_value = ".")]
  pub project_root: PathBuf,

  /// Path to the header template [default: header.txt]
  #[arg(long, value_name = "FILE")]
  pub header: Option<PathBuf>,

  /// Newline sequence used when rendering the header [default: lf]
  #[arg(long, value_name = "ENDING", value_enum)]
  pub line_ending: Option<LineEnding>,

  /// Blank lines inserted after the closing comment delimiter [default: 1]
  #[arg(long, value_name = "N")]
  pub spacing: Option<usize>,

  /// Template variable as KEY=VALUE (repeatable); substitutes ${KEY} and
  /// {{KEY}} tokens
  #[arg(long = "var", value_name = "KEY=VALUE")]
  pub variables: Vec<String>,

  /// Directory to scan, relative to the project root (repeatable)
  /// [default: src]
  #[arg(long = "root", value_name = "DIR")]
  pub source_roots: Vec<PathBuf>,

  /// Pattern for files to consider (repeatable; empty = all files)
  #[arg(long, value_name = "PATTERN")]
  pub include: Vec<String>,

  /// Pattern for files to always skip (repeatable; wins over --include)
  #[arg(long, value_name = "PATTERN")]
  pub exclude: Vec<String>,

  /// Path to config file (default: .headstamp.toml in the project root)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output
  #[arg(long, value_name = "WHEN", value_enum, default_value_t = ColorMode::Auto)]
  pub colors: ColorMode,
}

impl CommonArgs {
  /// Initialize logging and color handling from the shared flags.
  pub fn init_output(&self) {
    init_tracing(self.quiet, self.verbose);
    if self.verbose > 0 {
      set_verbose();
    } else if self.quiet {
      set_quiet();
    }
    self.colors.apply();
  }

  /// Canonicalize the project root, failing on a nonexistent directory.
  pub fn resolve_project_root(&self) -> Result<PathBuf> {
    std::fs::canonicalize(&self.project_root)
      .with_context(|| format!("Project root does not exist: {}", self.project_root.display()))
  }

  /// Resolve the final configuration: CLI flags over config-file values over
  /// defaults. Patterns from both sources accumulate.
  pub fn resolve_config(&self, project_root: &Path) -> Result<Config> {
    let mut builder = Config::builder();

    if let Some(ref header) = self.header {
      builder = builder.header_template(header.as_path());
    }
    if let Some(line_ending) = self.line_ending {
      builder = builder.line_ending(line_ending);
    }
    if let Some(spacing) = self.spacing {
      builder = builder.spacing_after_header(spacing);
    }
    for spec in &self.variables {
      let (key, value) = parse_variable(spec)?;
      builder = builder.variable(key, value);
    }
    for root in &self.source_roots {
      builder = builder.source_root(root.as_path());
    }
    for pattern in &self.include {
      builder = builder.include(pattern.as_str());
    }
    for pattern in &self.exclude {
      builder = builder.exclude(pattern.as_str());
    }

    if !self.no_config
      && let Some(file) = load_config(self.config.as_deref(), project_root)?
    {
      builder = builder.apply_file(file);
    }

    Ok(builder.build())
  }
}

/// Parse a `KEY=VALUE` variable specification.
fn parse_variable(spec: &str) -> Result<(&str, &str)> {
  match spec.split_once('=') {
    Some((key, value)) if !key.is_empty() => Ok((key, value)),
    _ => bail!("Invalid variable '{spec}': expected KEY=VALUE"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_variable_splits_on_first_equals() {
    let (key, value) = parse_variable("author=Ada=Lovelace").expect("parses");
    assert_eq!(key, "author");
    assert_eq!(value, "Ada=Lovelace");
  }

  #[test]
  fn parse_variable_rejects_missing_equals() {
    assert!(parse_variable("author").is_err());
    assert!(parse_variable("=value").is_err());
  }

  #[test]
  fn cli_flags_override_config_values() {
    let args = CommonArgs {
      spacing: Some(0),
      include: vec!["*.rs".to_string()],
      variables: vec!["year=2026".to_string()],
      no_config: true,
      ..CommonArgs::default()
    };

    let config = args.resolve_config(Path::new(".")).expect("resolves");
    assert_eq!(config.spacing_after_header, 0);
    assert_eq!(config.include_patterns, vec!["*.rs"]);
    assert_eq!(config.variables.get("year").map(String::as_str), Some("2026"));
  }
}
