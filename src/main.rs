//! # headstamp
//!
//! A tool that stamps and verifies a standardized comment header across a
//! tree of source files.

use anyhow::Result;
use headstamp::cli::Cli;

fn main() -> Result<()> {
  Cli::parse_args().run()
}
