// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Batch validation over a sequence of commits.

use crate::config::RuleConfig;
use crate::message::RawCommit;
use crate::rules::RuleSet;

use super::evaluator::CommitEvaluator;
use super::verdict::{Summary, Verdict};

/// Commits handed to each worker per window when running in parallel.
const COMMITS_PER_JOB: usize = 8;

/// Runs a [`CommitEvaluator`] over many commits and aggregates a [`Summary`].
///
/// Verdicts are emitted in input order regardless of `jobs`.
#[derive(Debug, Clone)]
pub struct BatchValidator<'a> {
    evaluator: CommitEvaluator<'a>,
    jobs: usize,
    fail_fast: bool,
}

impl<'a> BatchValidator<'a> {
    /// Create a sequential validator.
    pub fn new(rules: &'a RuleSet, config: &'a RuleConfig) -> Self {
        Self {
            evaluator: CommitEvaluator::new(rules, config),
            jobs: 1,
            fail_fast: false,
        }
    }

    /// Number of worker threads, capped at the available parallelism.
    /// Values below 1 mean sequential.
    pub fn jobs(mut self, jobs: usize) -> Self {
        let available = std::thread::available_parallelism().map_or(1, |n| n.get());
        self.jobs = jobs.clamp(1, available.max(1));
        self
    }

    /// Stop after the first failing verdict.
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Validate `commits`, calling `on_verdict` for each verdict in input order.
    pub fn run<F>(&self, commits: &[RawCommit], mut on_verdict: F) -> Summary
    where
        F: FnMut(&Verdict),
    {
        let mut summary = Summary::default();
        let window = if self.jobs > 1 {
            self.jobs.saturating_mul(COMMITS_PER_JOB)
        } else {
            1
        };

        for batch in commits.chunks(window) {
            for verdict in self.evaluate_window(batch) {
                summary.record(&verdict);
                on_verdict(&verdict);

                if self.fail_fast && !verdict.passed() {
                    tracing::debug!("Stopping after first failure: {}", verdict.sha);
                    return summary;
                }
            }
        }

        tracing::debug!(
            "Validated {} commit(s), {} failed",
            summary.total,
            summary.failed
        );
        summary
    }

    /// Validate `commits` and return every verdict along with the summary.
    pub fn run_collect(&self, commits: &[RawCommit]) -> (Summary, Vec<Verdict>) {
        let mut verdicts = Vec::with_capacity(commits.len());
        let summary = self.run(commits, |verdict| verdicts.push(verdict.clone()));
        (summary, verdicts)
    }

    fn evaluate_window(&self, batch: &[RawCommit]) -> Vec<Verdict> {
        if self.jobs == 1 || batch.len() < 2 {
            return batch
                .iter()
                .map(|commit| self.evaluator.evaluate(commit))
                .collect();
        }

        // Each worker fills its own slice of slots, so results keep input order.
        let workers = self.jobs.min(batch.len());
        let per_worker = batch.len().div_ceil(workers);
        let mut slots: Vec<Option<Verdict>> = vec![None; batch.len()];
        let evaluator = self.evaluator;

        std::thread::scope(|scope| {
            for (commits, out) in batch.chunks(per_worker).zip(slots.chunks_mut(per_worker)) {
                scope.spawn(move || {
                    for (commit, slot) in commits.iter().zip(out.iter_mut()) {
                        *slot = Some(evaluator.evaluate(commit));
                    }
                });
            }
        });

        slots.into_iter().flatten().collect()
    }
}
