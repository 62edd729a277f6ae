//! Command-line surface for the conformance driver
//!
//! The CLI uses clap for argument parsing with derive macros. `execute()`
//! returns `CliResult<ExitCode>` instead of calling `process::exit`; only the
//! top-level `run()` function handles errors and exits.
//!
//! ## Exit status
//!
//! - `0` — every executed case passed (skips are fine)
//! - `1` — at least one case failed, errored, or timed out; or a fatal
//!   mid-run error
//! - `2` — configuration error, nothing ran

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::RunConfig;
use crate::discovery::{self, OsFileTree};
use crate::invoke::ProcessInvoker;
use crate::report::{AnsiStyle, ConsoleReporter};
use crate::runner;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// Configuration error: preconditions violated, nothing ran.
    pub const CONFIG: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(format!("[ERROR]: {}", message.into()), ExitCode::FAILURE)
    }

    /// Create a configuration error (exit code 2).
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(format!("[ERROR]: {}", message.into()), ExitCode::CONFIG)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Golden-file conformance driver for parser binaries
#[derive(Parser, Debug)]
#[command(name = "goldrun")]
#[command(version = VERSION)]
#[command(about = "Golden-file conformance driver for parser binaries", long_about = None)]
pub struct Cli {
    /// Path to the parser executable under test
    #[arg(long, value_name = "PATH", default_value = "bin/js-parser")]
    pub binary: PathBuf,

    /// Retain .out/.err artifacts after classification
    #[arg(long)]
    pub keep_output: bool,

    /// Test roots; repeatable, comma-separated values are split
    #[arg(long = "tests", value_name = "ROOTS")]
    pub tests: Vec<String>,

    /// Directory to change into before discovery and execution
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub testbase: PathBuf,

    /// Print Pass lines and always show summary sub-counts
    #[arg(short, long)]
    pub verbose: bool,

    /// Per-invocation execution bound, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 1)]
    pub timeout: u64,

    /// Recognized source extension for test candidates
    #[arg(long, value_name = "EXT", default_value = "js")]
    pub extension: String,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. `execute()`
/// returns `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Validate configuration, discover cases, run the suite, and map the
/// aggregate result onto an exit code.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = RunConfig::from_cli(&cli)?;

    env::set_current_dir(&config.testbase).map_err(|e| {
        CliError::config(format!(
            "cannot enter test base directory `{}`: {}",
            config.testbase.display(),
            e
        ))
    })?;

    let cases = discovery::discover(&OsFileTree, &config.roots, &config.extension);

    let mut reporter = ConsoleReporter::new(config.verbose, AnsiStyle);
    let totals = runner::run_suite(&ProcessInvoker, &mut reporter, &config, &cases)
        .map_err(|e| CliError::failure(e.to_string()))?;

    if totals.all_green() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

// ============================================================================
// Tests
// ============================================================================
