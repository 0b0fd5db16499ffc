// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule violations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single problem reported by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Name of the rule that reported it.
    pub rule: String,
    /// Human-readable message.
    pub message: String,
    /// One-based line number in the message, when the rule can tell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Violation {
    /// Create a violation not tied to a particular line.
    pub fn new(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            line: None,
        }
    }

    /// Create a violation pointing at a line.
    pub fn at(rule: impl Into<String>, message: impl Into<String>, line: usize) -> Self {
        Self {
            line: Some(line),
            ..Self::new(rule, message)
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} (line {}): {}", self.rule, line, self.message),
            None => write!(f, "{}: {}", self.rule, self.message),
        }
    }
}
