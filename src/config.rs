//! Run configuration
//!
//! `RunConfig` is the fully resolved form of the CLI arguments. Resolution
//! also enforces the preconditions that make a run meaningful: the parser
//! binary must exist and be executable, and the test base directory must
//! exist. Violations are fatal configuration errors; nothing runs afterwards.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::{Cli, CliError, CliResult};

/// Fully resolved configuration for one conformance run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Absolute path to the parser binary. Resolved against the invoking
    /// directory *before* the chdir into the test base, so a relative
    /// `--binary` keeps meaning what the caller typed.
    pub binary: PathBuf,
    /// Retain `.out`/`.err` artifacts after classification.
    pub keep_output: bool,
    /// Discovery roots, in the order given.
    pub roots: Vec<String>,
    /// Directory to enter before discovery and execution.
    pub testbase: PathBuf,
    /// Print Pass lines and always show summary sub-counts.
    pub verbose: bool,
    /// Per-invocation execution bound.
    pub timeout: Duration,
    /// Recognized source extension, matched as a filename suffix with its
    /// leading dot (`.js`).
    pub extension: String,
}

impl RunConfig {
    /// Resolve and validate CLI arguments.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let binary = std::path::absolute(&cli.binary).map_err(|e| {
            CliError::config(format!(
                "cannot resolve parser binary `{}`: {}",
                cli.binary.display(),
                e
            ))
        })?;

        if !binary.is_file() {
            return Err(CliError::config(format!(
                "parser binary `{}` does not exist",
                cli.binary.display()
            )));
        }
        if !is_executable(&binary) {
            return Err(CliError::config(format!(
                "parser binary `{}` is not executable",
                cli.binary.display()
            )));
        }
        if !cli.testbase.is_dir() {
            return Err(CliError::config(format!(
                "test base directory `{}` does not exist",
                cli.testbase.display()
            )));
        }

        Ok(Self {
            binary,
            keep_output: cli.keep_output,
            roots: resolve_roots(&cli.tests),
            testbase: cli.testbase.clone(),
            verbose: cli.verbose,
            timeout: Duration::from_secs(cli.timeout),
            extension: normalize_extension(&cli.extension),
        })
    }
}

/// Split each `--tests` value on commas, preserving order; default to the
/// `js` tree when the flag was never given.
pub fn resolve_roots(values: &[String]) -> Vec<String> {
    if values.is_empty() {
        return vec!["js".to_string()];
    }
    values
        .iter()
        .flat_map(|value| value.split(','))
        .filter(|root| !root.is_empty())
        .map(str::to_string)
        .collect()
}

fn normalize_extension(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|meta| meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    // No portable executable bit; existence already checked.
    true
}

// ============================================================================
// Tests
// ============================================================================
