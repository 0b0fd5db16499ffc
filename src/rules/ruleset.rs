// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Ordered rule collections.

use crate::config::RuleConfig;
use crate::error::ConfigError;

use super::builtin::*;

/// A named, ordered collection of rules.
#[derive(Debug)]
pub struct RuleSet {
    name: String,
    rules: Vec<Box<dyn Rule>>,
}

/// A rule's name and whether it runs under a given configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RuleStatus {
    pub name: String,
    pub description: String,
    pub default: bool,
    pub enabled: bool,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// The standard rules, in reporting order.
    pub fn standard() -> Self {
        Self::new("standard")
            .with_rule(Box::new(SubjectPresent))
            .with_rule(Box::new(SubjectLength))
            .with_rule(Box::new(DescriptionPresent))
            .with_rule(Box::new(DescriptionLineLength))
            .with_rule(Box::new(SubjectBodySeparator))
            .with_rule(Box::new(BodyTrailerSeparator))
            .with_rule(Box::new(SignoffPresent))
            .with_rule(Box::new(AuthorNamePresent))
            .with_rule(Box::new(AuthorEmailPresent))
            .with_rule(Box::new(SubjectImperativeMood))
    }

    /// Register a rule after the existing ones. A rule with the same name
    /// replaces the earlier registration in place.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        match self.rules.iter().position(|r| r.name() == rule.name()) {
            Some(idx) => {
                tracing::debug!("Replacing rule '{}'", rule.name());
                self.rules[idx] = rule;
            }
            None => self.rules.push(rule),
        }
    }

    /// Builder-style variant of [`RuleSet::add_rule`].
    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.add_rule(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| {
            let rule: &dyn Rule = rule.as_ref();
            rule
        })
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.iter().find(|rule| rule.name() == name)
    }

    /// Rules that run under `config`, in registration order.
    pub fn enabled<'a>(&'a self, config: &'a RuleConfig) -> impl Iterator<Item = &'a dyn Rule> {
        self.iter()
            .filter(move |rule| config.is_enabled(rule.name(), rule.enabled_by_default()))
    }

    /// Reject configurations that cannot be applied to this rule set.
    pub fn check_config(&self, config: &RuleConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if let Some(unknown) = config.enabled.keys().find(|name| self.get(name).is_none()) {
            return Err(ConfigError::UnknownRule {
                name: unknown.clone(),
            });
        }

        Ok(())
    }

    /// Default and effective status of every rule.
    pub fn statuses(&self, config: &RuleConfig) -> Vec<RuleStatus> {
        self.iter()
            .map(|rule| RuleStatus {
                name: rule.name().to_string(),
                description: rule.description().to_string(),
                default: rule.enabled_by_default(),
                enabled: config.is_enabled(rule.name(), rule.enabled_by_default()),
            })
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
