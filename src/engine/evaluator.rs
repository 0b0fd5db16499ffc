// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Single-commit evaluation.

use crate::config::RuleConfig;
use crate::message::{ParsedMessage, RawCommit};
use crate::rules::RuleSet;

use super::verdict::Verdict;

/// Applies a rule set to individual commits.
#[derive(Debug, Clone, Copy)]
pub struct CommitEvaluator<'a> {
    rules: &'a RuleSet,
    config: &'a RuleConfig,
}

impl<'a> CommitEvaluator<'a> {
    /// Create an evaluator for the given rules and configuration.
    pub fn new(rules: &'a RuleSet, config: &'a RuleConfig) -> Self {
        Self { rules, config }
    }

    /// Parse the commit message once and run every enabled rule on it.
    pub fn evaluate(&self, commit: &RawCommit) -> Verdict {
        let parsed = ParsedMessage::parse(&commit.message);
        let mut violations = Vec::new();

        for rule in self.rules.enabled(self.config) {
            let found = rule.evaluate(&parsed, commit, self.config);
            if !found.is_empty() {
                tracing::debug!(
                    "Rule '{}' reported {} violation(s) for {}",
                    rule.name(),
                    found.len(),
                    commit.short_sha()
                );
            }
            violations.extend(found);
        }

        Verdict {
            sha: commit.sha.clone(),
            subject: parsed.subject,
            violations,
        }
    }
}

/// Evaluate one commit against `rules` under `config`.
pub fn evaluate(commit: &RawCommit, rules: &RuleSet, config: &RuleConfig) -> Verdict {
    CommitEvaluator::new(rules, config).evaluate(commit)
}
