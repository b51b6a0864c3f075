//! # Check Command
//!
//! This module implements the read-only verification command. It renders the
//! header once, scans the configured roots, and lists every file whose
//! content does not start with the rendered header. The process exits
//! non-zero when violations exist; no file is ever modified.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::cli::CommonArgs;
use crate::diff::DiffManager;
use crate::info_log;
use crate::output::{print_blank_line, print_check_passed, print_hint, print_violations};
use crate::processor::Processor;

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
  #[command(flatten)]
  pub common: CommonArgs,

  /// Show a diff of what `update` would change, without modifying files
  #[arg(long)]
  pub show_diff: bool,

  /// Save the diff of potential changes to a file
  #[arg(long, short = 'o', value_name = "FILE")]
  pub save_diff: Option<PathBuf>,

  /// Write a JSON report of the run to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,
}

/// Run the check command with the given arguments
pub fn run_check(args: CheckArgs) -> Result<()> {
  args.common.init_output();

  let project_root = args.common.resolve_project_root()?;
  debug!("Using project root: {}", project_root.display());

  let config = args.common.resolve_config(&project_root)?;

  let mut processor = Processor::new(config, project_root);
  let diff_manager = DiffManager::new(args.show_diff, args.save_diff);
  if diff_manager.is_active() {
    processor = processor.with_diff_manager(diff_manager);
  }

  let report = processor.check()?;

  if let Some(ref output_path) = args.report_json {
    report.save_json(output_path)?;
    info_log!("Wrote JSON report to {}", output_path.display());
  }

  if report.violations.is_empty() {
    print_check_passed(&report);
    return Ok(());
  }

  print_violations(&report.violations);
  print_blank_line();
  print_hint("Run `headstamp update` to stamp the listed files.");
  process::exit(1);
}
