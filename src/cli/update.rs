//! # Update Command
//!
//! This module implements the in-place stamping command. Every in-scope file
//! whose content does not start with the rendered header is rewritten —
//! missing headers are inserted, stale leading block comments replaced — and
//! the number of files changed is reported. Already-compliant files are
//! never touched, so the command is safe to re-run.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::cli::CommonArgs;
use crate::info_log;
use crate::output::{print_nothing_to_do, print_update_summary};
use crate::processor::Processor;

/// Arguments for the update command
#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
  #[command(flatten)]
  pub common: CommonArgs,

  /// Write a JSON report of the run to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,
}

/// Run the update command with the given arguments
pub fn run_update(args: UpdateArgs) -> Result<()> {
  args.common.init_output();

  let project_root = args.common.resolve_project_root()?;
  debug!("Using project root: {}", project_root.display());

  let config = args.common.resolve_config(&project_root)?;

  let processor = Processor::new(config, project_root);
  let report = processor.update()?;

  if let Some(ref output_path) = args.report_json {
    report.save_json(output_path)?;
    info_log!("Wrote JSON report to {}", output_path.display());
  }

  if report.nothing_to_do() {
    print_nothing_to_do();
  } else {
    print_update_summary(&report);
  }

  Ok(())
}
