//! # headstamp
//!
//! A tool that stamps and verifies a standardized comment header (e.g. a
//! copyright or license notice) across a tree of source files.
//!
//! `headstamp` renders a header template once per run — substituting
//! `${name}` / `{{name}}` variables and wrapping the result as a `/* ... */`
//! block comment — then compares every in-scope file against that single
//! canonical string. Files are selected by walking configured source roots
//! and filtering with flat glob-like include/exclude patterns (exclude
//! always wins).
//!
//! ## Features
//!
//! * `check`: read-only verification that fails listing every non-compliant
//!   file
//! * `update`: idempotent in-place rewrite — inserts missing headers and
//!   replaces stale leading block comments wholesale
//! * Template variables with two placeholder syntaxes and single-pass,
//!   non-recursive substitution
//! * Configurable line ending (LF/CRLF) and post-header spacing
//! * Optional `.headstamp.toml` configuration with CLI overrides
//! * Diff preview and JSON reporting for CI integration
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! use headstamp::config::Config;
//! use headstamp::processor::Processor;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Resolve the configuration once; it is immutable afterwards.
//!     let config = Config::builder()
//!         .header_template("header.txt")
//!         .variable("year", "2026")
//!         .source_root("src")
//!         .include("*.rs")
//!         .build();
//!
//!     let processor = Processor::new(config, PathBuf::from("."));
//!
//!     // Verify without modifying anything.
//!     let report = processor.check()?;
//!     for violation in &report.violations {
//!         println!("missing header: {}", violation.path);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - The check/update orchestrator producing [`report::Report`]s
//! * [`renderer`] - Header template loading, substitution, and comment wrapping
//! * [`pattern`] - The flat glob-like scope pattern language
//! * [`scanner`] - Source root traversal
//!
//! [`processor`]: crate::processor
//! [`renderer`]: crate::renderer
//! [`pattern`]: crate::pattern
//! [`scanner`]: crate::scanner

pub mod cli;
pub mod config;
pub mod detector;
pub mod diff;
pub mod logging;
pub mod output;
pub mod pattern;
pub mod processor;
pub mod renderer;
pub mod report;
pub mod rewrite;
pub mod scanner;
