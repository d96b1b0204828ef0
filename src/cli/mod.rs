//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `parse <FILE>` | Parse a workout and print the template |
//! | `check <FILE>` | Report errors and warnings only |
//! | `fmt <FILE>` | Re-emit the workout as canonical LMWF |
//!
//! `<FILE>` may be `-` to read from stdin.
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output, including parser logs:
//! ```bash
//! liftmark --verbose check push_day.md
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod workout;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
