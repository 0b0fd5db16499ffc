// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Per-commit verdicts and batch summaries.

use serde::Serialize;

use crate::rules::Violation;

/// The outcome of validating one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// SHA of the evaluated commit.
    pub sha: String,
    /// Subject line, for display.
    pub subject: String,
    /// Violations in rule registration order.
    pub violations: Vec<Violation>,
}

impl Verdict {
    /// Whether the commit passed every enabled rule.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Abbreviated SHA for display.
    pub fn short_sha(&self) -> &str {
        crate::message::short_sha(&self.sha)
    }
}

/// Aggregate counts for a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Commits evaluated.
    pub total: usize,
    /// Commits with at least one violation.
    pub failed: usize,
    /// SHAs of the failing commits, in input order.
    pub failing_shas: Vec<String>,
}

impl Summary {
    /// Fold one verdict into the counts.
    pub fn record(&mut self, verdict: &Verdict) {
        self.total += 1;
        if !verdict.passed() {
            self.failed += 1;
            self.failing_shas.push(verdict.sha.clone());
        }
    }

    /// Whether every evaluated commit passed.
    pub fn passed(&self) -> bool {
        self.failed == 0
    }

    /// Process exit code for this summary.
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}
