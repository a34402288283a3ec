use super::record::Equity;
use crate::EVALUATOR_MIN_TRIALS;
use crate::EVALUATOR_TIME_BUDGET;
use crate::cards::hand::Hand;
use std::time::Duration;

/// How hard the evaluator may work on one situation.
///
/// The evaluator runs at least `trials` samples and keeps going until
/// `time` has elapsed. Convergence is its own business: when the budget is
/// tight it returns its best estimate rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    pub time: Duration,
    pub trials: usize,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            time: EVALUATOR_TIME_BUDGET,
            trials: EVALUATOR_MIN_TRIALS,
        }
    }
}

/// The equity oracle the generator fans out to.
///
/// Must be pure in its inputs: calls run concurrently on a worker pool in
/// no particular order. Hand evaluation lives outside this crate, so any
/// `Fn(Hand, Hand, usize, &Budget) -> anyhow::Result<Equity>` closure can
/// stand in for one.
pub trait Evaluator: Sync {
    fn evaluate(
        &self,
        pockets: Hand,
        board: Hand,
        opponents: usize,
        budget: &Budget,
    ) -> anyhow::Result<Equity>;
}

impl<F> Evaluator for F
where
    F: Fn(Hand, Hand, usize, &Budget) -> anyhow::Result<Equity> + Sync,
{
    fn evaluate(
        &self,
        pockets: Hand,
        board: Hand,
        opponents: usize,
        budget: &Budget,
    ) -> anyhow::Result<Equity> {
        self(pockets, board, opponents, budget)
    }
}
