//! Case classification and the sequential suite loop
//!
//! Cases are processed strictly one at a time: invoke, classify, clean up
//! artifacts, then move on. The counters live in a single owned `RunTotals`
//! aggregate — no globals.

use std::fs;
use std::path::Path;

use crate::config::RunConfig;
use crate::discovery::TestCase;
use crate::invoke::{CaseInvoker, InvokeError};
use crate::report::Reporter;

/// Terminal classification of a single test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Parser exited zero and stdout matched the golden file byte for byte.
    Pass,
    /// Parser exited zero but stdout diverged from the golden file.
    Fail,
    /// Parser process itself exited non-zero.
    Error,
    /// Parser exceeded the execution bound and was killed. Counted with the
    /// errors rather than aborting the run.
    TimedOut,
    /// No golden file exists; the parser was never invoked.
    Skip,
}

/// Aggregate result counters for one run.
///
/// Invariants, maintained by `record`:
/// `total == executed + skipped` and `executed == passed + failed + errored`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunTotals {
    pub total: u32,
    pub executed: u32,
    pub passed: u32,
    pub failed: u32,
    pub errored: u32,
    pub skipped: u32,
}

impl RunTotals {
    pub fn record(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Skip => self.skipped += 1,
            Outcome::Pass => {
                self.executed += 1;
                self.passed += 1;
            }
            Outcome::Fail => {
                self.executed += 1;
                self.failed += 1;
            }
            Outcome::Error | Outcome::TimedOut => {
                self.executed += 1;
                self.errored += 1;
            }
        }
    }

    /// True when nothing failed, errored, or timed out.
    pub fn all_green(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }
}

/// Classify one test case.
///
/// A case without a golden file is a `Skip` and never reaches the invoker.
/// Otherwise the parser runs with its output captured into the `.out`/`.err`
/// artifacts, which are removed after classification unless retention is
/// enabled. Only spawn and artifact I/O failures escape as errors; timeouts
/// become `Outcome::TimedOut`.
pub fn classify_case<I: CaseInvoker>(
    invoker: &I,
    config: &RunConfig,
    case: &TestCase,
) -> Result<Outcome, InvokeError> {
    let expected = case.expected_path();
    if !expected.is_file() {
        return Ok(Outcome::Skip);
    }

    let out = case.out_path();
    let err = case.err_path();

    let outcome = match invoker.invoke(&config.binary, case.path(), &out, &err, config.timeout) {
        Ok(true) => {
            if golden_matches(&expected, &out)? {
                Outcome::Pass
            } else {
                Outcome::Fail
            }
        }
        Ok(false) => Outcome::Error,
        Err(InvokeError::Timeout { .. }) => Outcome::TimedOut,
        // Artifacts are left behind on the fatal path; the run is over anyway.
        Err(fatal) => return Err(fatal),
    };

    if !config.keep_output {
        remove_artifacts(&out, &err);
    }
    Ok(outcome)
}

/// Byte-exact comparison of the golden file against the captured stdout.
fn golden_matches(expected: &Path, out: &Path) -> Result<bool, InvokeError> {
    Ok(fs::read(expected)? == fs::read(out)?)
}

fn remove_artifacts(out: &Path, err: &Path) {
    for artifact in [out, err] {
        if let Err(e) = fs::remove_file(artifact) {
            tracing::warn!(artifact = %artifact.display(), error = %e, "failed to remove artifact");
        }
    }
}

/// Process every case in order, mirroring each classification to the reporter
/// and emitting the final summary.
pub fn run_suite<I: CaseInvoker, R: Reporter>(
    invoker: &I,
    reporter: &mut R,
    config: &RunConfig,
    cases: &[TestCase],
) -> Result<RunTotals, InvokeError> {
    let mut totals = RunTotals::default();
    for case in cases {
        let outcome = classify_case(invoker, config, case)?;
        totals.record(outcome);
        reporter.case_classified(case, outcome);
    }
    reporter.run_finished(&totals);
    Ok(totals)
}

// ============================================================================
// Tests
// ============================================================================
