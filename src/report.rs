//! Console reporting
//!
//! Reporting is split in two: pure rendering functions that produce the live
//! case lines and the final summary table, and a `Reporter` trait carrying
//! them to the console. Severity decoration is an injectable `Style` strategy
//! so piped output and tests can render without escape codes.

use crate::discovery::TestCase;
use crate::runner::{Outcome, RunTotals};

/// Severity classes used to decorate report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    All,
    Skip,
    Exec,
    Pass,
    Fail,
    Error,
}

/// Rendering strategy for severity decoration.
pub trait Style {
    /// Wrap `text` in the decoration for `severity`.
    fn paint(&self, severity: Severity, text: &str) -> String;
}

/// ANSI escape decoration, the interactive default.
pub struct AnsiStyle;

impl Style for AnsiStyle {
    fn paint(&self, severity: Severity, text: &str) -> String {
        let code = match severity {
            Severity::All => "\x1b[1m",
            Severity::Skip => "\x1b[1;34m",
            Severity::Exec => "",
            Severity::Pass => "\x1b[1;32m",
            Severity::Fail => "\x1b[1;31m",
            Severity::Error => "\x1b[1;35m",
        };
        format!("{code}{text}\x1b[0m")
    }
}

/// No decoration at all, for non-terminal output and tests.
pub struct PlainStyle;

impl Style for PlainStyle {
    fn paint(&self, _severity: Severity, text: &str) -> String {
        text.to_string()
    }
}

fn tag(outcome: Outcome) -> (&'static str, Severity) {
    match outcome {
        Outcome::Pass => ("[PASS]", Severity::Pass),
        Outcome::Fail => ("[FAIL]", Severity::Fail),
        Outcome::Error => ("[ERR ]", Severity::Error),
        Outcome::TimedOut => ("[TIME]", Severity::Error),
        Outcome::Skip => ("[SKIP]", Severity::Skip),
    }
}

/// Live console line for one classified case.
pub fn render_case_line<S: Style>(style: &S, case: &TestCase, outcome: Outcome) -> String {
    let (tag, severity) = tag(outcome);
    style.paint(severity, &format!("{tag} {}", case.path().display()))
}

const RULE: &str = "============================================================";

/// Final aligned summary table.
///
/// The skipped/failed/errors rows appear only when verbose or nonzero.
pub fn render_summary<S: Style>(style: &S, totals: &RunTotals, verbose: bool) -> String {
    let mut lines = vec![RULE.to_string()];

    lines.push(style.paint(
        Severity::All,
        &format!("All tests . . . . . . . . . . . : {:5}", totals.total),
    ));
    if verbose || totals.skipped > 0 {
        lines.push(style.paint(
            Severity::Skip,
            &format!("  +-- skipped tests . . . . . . :     + {:5}", totals.skipped),
        ));
    }
    lines.push(style.paint(
        Severity::Exec,
        &format!("  +-- executed tests  . . . . . :     + {:5}", totals.executed),
    ));
    lines.push(style.paint(
        Severity::Pass,
        &format!("      +-- passed tests  . . . . :           + {:5}", totals.passed),
    ));
    if verbose || totals.failed > 0 {
        lines.push(style.paint(
            Severity::Fail,
            &format!("      +-- failed tests  . . . . :           + {:5}", totals.failed),
        ));
    }
    if verbose || totals.errored > 0 {
        lines.push(style.paint(
            Severity::Error,
            &format!("      +-- errors  . . . . . . . :           + {:5}", totals.errored),
        ));
    }

    lines.push(RULE.to_string());
    lines.join("\n")
}

// ============================================================================
// Reporter
// ============================================================================

/// Observer for run progress and the final summary.
///
/// Implement this to carry results elsewhere; tests use a recording
/// implementation instead of capturing stdout.
pub trait Reporter {
    /// Called once per case, immediately after classification.
    fn case_classified(&mut self, case: &TestCase, outcome: Outcome);

    /// Called once, after the last case.
    fn run_finished(&mut self, totals: &RunTotals);
}

/// Default console reporter. `Pass` lines print only in verbose mode.
pub struct ConsoleReporter<S> {
    verbose: bool,
    style: S,
}

impl<S: Style> ConsoleReporter<S> {
    pub fn new(verbose: bool, style: S) -> Self {
        Self { verbose, style }
    }
}

impl<S: Style> Reporter for ConsoleReporter<S> {
    fn case_classified(&mut self, case: &TestCase, outcome: Outcome) {
        if outcome == Outcome::Pass && !self.verbose {
            return;
        }
        println!("{}", render_case_line(&self.style, case, outcome));
    }

    fn run_finished(&mut self, totals: &RunTotals) {
        println!("{}", render_summary(&self.style, totals, self.verbose));
    }
}

// ============================================================================
// Tests
// ============================================================================
