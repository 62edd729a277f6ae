//! Parser invocation boundary
//!
//! The runner never spawns processes directly; it goes through `CaseInvoker`.
//! Keeping this as a trait lets the classification logic run against a spy in
//! tests — in particular, asserting that a skipped case never spawns anything.

use std::fs::File;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Errors crossing the invocation boundary.
///
/// `Timeout` is classified by the runner as a per-case outcome; the other
/// variants are fatal to the run (the binary is validated up front, so a
/// failed spawn means the environment changed underneath us).
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("failed to spawn `{binary}`: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: io::Error,
    },

    #[error("`{case}` exceeded the {}s execution bound", timeout.as_secs_f64())]
    Timeout { case: String, timeout: Duration },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Boundary through which the parser under test is spawned.
pub trait CaseInvoker {
    /// Run `<binary> <case>` with stdout and stderr redirected into the given
    /// artifact paths, bounded by `timeout`.
    ///
    /// Returns `true` when the process exited with status zero.
    fn invoke(
        &self,
        binary: &Path,
        case: &Path,
        stdout: &Path,
        stderr: &Path,
        timeout: Duration,
    ) -> Result<bool, InvokeError>;
}

/// Real subprocess invoker with a polled execution bound.
pub struct ProcessInvoker;

const POLL_INTERVAL: Duration = Duration::from_millis(5);

impl CaseInvoker for ProcessInvoker {
    fn invoke(
        &self,
        binary: &Path,
        case: &Path,
        stdout: &Path,
        stderr: &Path,
        timeout: Duration,
    ) -> Result<bool, InvokeError> {
        let out = File::create(stdout)?;
        let err = File::create(stderr)?;

        tracing::debug!(
            binary = %binary.display(),
            case = %case.display(),
            "invoking parser"
        );

        let mut child = Command::new(binary)
            .arg(case)
            .stdin(Stdio::null())
            .stdout(Stdio::from(out))
            .stderr(Stdio::from(err))
            .spawn()
            .map_err(|source| InvokeError::Spawn {
                binary: binary.display().to_string(),
                source,
            })?;

        let deadline = Instant::now() + timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status.success());
            }
            if Instant::now() >= deadline {
                // Reap the child before reporting the timeout.
                let _ = child.kill();
                let _ = child.wait();
                tracing::debug!(case = %case.display(), "parser timed out");
                return Err(InvokeError::Timeout {
                    case: case.display().to_string(),
                    timeout,
                });
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}
