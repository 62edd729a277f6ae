#![forbid(unsafe_code)]
//! Goldrun — golden-file conformance driver for parser binaries
//!
//! Goldrun discovers test-case source files, feeds each one to an external
//! parser executable, compares the captured stdout against a companion
//! `<case>.expected` golden file, and prints an aggregate report.
//!
//! ## Pipeline
//!
//! - `discovery` walks the configured roots and yields candidate cases.
//! - `invoke` spawns the parser with stdout/stderr redirected into transient
//!   `.out`/`.err` artifacts, bounded by an execution timeout.
//! - `runner` classifies each case (pass/fail/error/timeout/skip) and keeps
//!   the aggregate counters.
//! - `report` mirrors classifications to the console and renders the final
//!   summary table.
//!
//! ## Panic Policy
//!
//! Production code uses `Result` with `?` / `map_err`; `.unwrap()` and
//! `.expect()` are acceptable in test code only.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod invoke;
pub mod report;
pub mod runner;

pub use config::RunConfig;
pub use discovery::{OsFileTree, TestCase, discover};
pub use invoke::{CaseInvoker, InvokeError, ProcessInvoker};
pub use report::{AnsiStyle, ConsoleReporter, PlainStyle, Reporter};
pub use runner::{Outcome, RunTotals, run_suite};
