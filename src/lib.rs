// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-guard - commit message validation
//!
//! Parses commit messages into subject, body and trailers and checks them
//! against a configurable, ordered set of rules before merge.
//!
//! # Features
//!
//! - **Message Parser**: Total parsing of subject, description and trailer block
//! - **Rule Set**: Independently switchable rules with stable reporting order
//! - **Batch Validation**: Order-preserving, optionally parallel evaluation
//! - **Commit Sources**: GitHub pull requests, local git ranges, message files
//!
//! # Example
//!
//! ```
//! use commit_guard::config::RuleConfig;
//! use commit_guard::engine::evaluate;
//! use commit_guard::message::RawCommit;
//! use commit_guard::rules::RuleSet;
//!
//! let commit = RawCommit::new(
//!     "abc123",
//!     "Fix bug\n\nThis fixes the bug.\n\nSigned-off-by: A <a@x.com>",
//! );
//! let verdict = evaluate(&commit, &RuleSet::standard(), &RuleConfig::default());
//! assert!(verdict.passed());
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod message;
pub mod report;
pub mod rules;
pub mod source;

// Re-exports for convenience
pub use config::{GuardConfig, RuleConfig};
pub use engine::{evaluate, BatchValidator, CommitEvaluator, Summary, Verdict};
pub use error::{GuardError, Result};
pub use message::{ParsedMessage, RawCommit};
pub use rules::{Rule, RuleSet, Violation};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-guard.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Version plus the abbreviated build commit, when known.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, crate::message::short_sha(sha), date)
            }
            (Some(sha), None) => format!("{} ({})", VERSION, crate::message::short_sha(sha)),
            _ => VERSION.to_string(),
        }
    }

    #[cfg(test)]
    mod tests {
        #[test]
        fn test_version_string_starts_with_version() {
            assert!(super::version_string().starts_with(super::VERSION));
        }
    }
}
