//! Property-based tests for the result counters
//!
//! These tests use proptest to verify the counter invariants across many
//! randomly generated outcome sequences, catching edge cases that
//! hand-written tests might miss.

use goldrun::{Outcome, RunTotals};
use proptest::prelude::*;

fn outcome_strategy() -> impl Strategy<Value = Outcome> {
    prop::sample::select(vec![
        Outcome::Pass,
        Outcome::Fail,
        Outcome::Error,
        Outcome::TimedOut,
        Outcome::Skip,
    ])
}

proptest! {
    /// Property: after recording any outcome sequence,
    /// `total == executed + skipped` and `executed == passed + failed + errored`.
    #[test]
    fn counter_invariants_hold(outcomes in prop::collection::vec(outcome_strategy(), 0..256)) {
        let mut totals = RunTotals::default();
        for outcome in &outcomes {
            totals.record(*outcome);
        }

        prop_assert_eq!(totals.total, totals.executed + totals.skipped);
        prop_assert_eq!(totals.executed, totals.passed + totals.failed + totals.errored);
        prop_assert_eq!(totals.total as usize, outcomes.len());
    }

    /// Property: each bucket counts exactly its own outcomes.
    #[test]
    fn buckets_count_their_outcomes(outcomes in prop::collection::vec(outcome_strategy(), 0..256)) {
        let mut totals = RunTotals::default();
        for outcome in &outcomes {
            totals.record(*outcome);
        }

        let count = |wanted: &[Outcome]| {
            outcomes.iter().filter(|o| wanted.contains(o)).count() as u32
        };

        prop_assert_eq!(totals.passed, count(&[Outcome::Pass]));
        prop_assert_eq!(totals.failed, count(&[Outcome::Fail]));
        prop_assert_eq!(totals.errored, count(&[Outcome::Error, Outcome::TimedOut]));
        prop_assert_eq!(totals.skipped, count(&[Outcome::Skip]));
        prop_assert_eq!(totals.all_green(), totals.failed == 0 && totals.errored == 0);
    }
}
