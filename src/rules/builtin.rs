// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Each rule is a small stateless value. Lengths are counted in Unicode
//! scalar values, never bytes.

use crate::config::RuleConfig;
use crate::message::{ParsedMessage, RawCommit};

use super::violation::Violation;

/// A single, independently switchable validation rule.
///
/// Rules never fail: a rule with nothing to say about the input returns
/// an empty list.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Stable rule name, used in configuration and reports.
    fn name(&self) -> &str;

    /// One-line description for listings.
    fn description(&self) -> &str;

    /// Whether the rule runs when the configuration does not mention it.
    fn enabled_by_default(&self) -> bool {
        false
    }

    /// Check a parsed message and return every violation found.
    fn evaluate(
        &self,
        parsed: &ParsedMessage,
        commit: &RawCommit,
        config: &RuleConfig,
    ) -> Vec<Violation>;
}

/// The subject line must not be blank.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectPresent;

impl SubjectPresent {
    pub const NAME: &'static str = "subject-present";
}

impl Rule for SubjectPresent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Subject line must not be empty"
    }

    fn enabled_by_default(&self) -> bool {
        true
    }

    fn evaluate(&self, parsed: &ParsedMessage, _: &RawCommit, _: &RuleConfig) -> Vec<Violation> {
        if parsed.subject.trim().is_empty() {
            vec![Violation::at(
                Self::NAME,
                "Commit message is missing subject",
                1,
            )]
        } else {
            Vec::new()
        }
    }
}

/// The subject line must fit within `sub_limit` characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectLength;

impl SubjectLength {
    pub const NAME: &'static str = "subject-length";
}

impl Rule for SubjectLength {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Subject line must not exceed sub_limit characters"
    }

    fn enabled_by_default(&self) -> bool {
        true
    }

    fn evaluate(
        &self,
        parsed: &ParsedMessage,
        _: &RawCommit,
        config: &RuleConfig,
    ) -> Vec<Violation> {
        let len = char_len(&parsed.subject);
        if len > config.sub_limit {
            vec![Violation::at(
                Self::NAME,
                format!(
                    "Subject exceeds {} characters ({} characters)",
                    config.sub_limit, len
                ),
                1,
            )]
        } else {
            Vec::new()
        }
    }
}

/// The message must carry a description after the subject.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptionPresent;

impl DescriptionPresent {
    pub const NAME: &'static str = "description-present";
}

impl Rule for DescriptionPresent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Message must have a description body"
    }

    fn enabled_by_default(&self) -> bool {
        true
    }

    fn evaluate(&self, parsed: &ParsedMessage, _: &RawCommit, _: &RuleConfig) -> Vec<Violation> {
        if parsed.body.is_empty() {
            vec![Violation::new(
                Self::NAME,
                "Commit message is missing description",
            )]
        } else {
            Vec::new()
        }
    }
}

/// Every description line must fit within `desc_limit` characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptionLineLength;

impl DescriptionLineLength {
    pub const NAME: &'static str = "description-line-length";
}

impl Rule for DescriptionLineLength {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Description lines must not exceed desc_limit characters"
    }

    fn enabled_by_default(&self) -> bool {
        true
    }

    fn evaluate(
        &self,
        parsed: &ParsedMessage,
        _: &RawCommit,
        config: &RuleConfig,
    ) -> Vec<Violation> {
        parsed
            .body
            .iter()
            .enumerate()
            .filter(|(_, line)| char_len(line) > config.desc_limit)
            .map(|(idx, line)| {
                Violation::at(
                    Self::NAME,
                    format!(
                        "Description line exceeds {} characters: {}",
                        config.desc_limit, line
                    ),
                    parsed.body_line_number(idx),
                )
            })
            .collect()
    }
}

/// A blank line must separate the subject from the description.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectBodySeparator;

impl SubjectBodySeparator {
    pub const NAME: &'static str = "subject-body-separator";
}

impl Rule for SubjectBodySeparator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Subject and description must be separated by a blank line"
    }

    fn enabled_by_default(&self) -> bool {
        true
    }

    fn evaluate(&self, parsed: &ParsedMessage, _: &RawCommit, _: &RuleConfig) -> Vec<Violation> {
        if !parsed.body.is_empty() && !parsed.has_blank_after_subject {
            vec![Violation::at(
                Self::NAME,
                "Commit subject and description must be separated by a blank line",
                2,
            )]
        } else {
            Vec::new()
        }
    }
}

/// A blank line must separate the trailer block from what precedes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyTrailerSeparator;

impl BodyTrailerSeparator {
    pub const NAME: &'static str = "body-trailer-separator";
}

impl Rule for BodyTrailerSeparator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Trailers must be separated from the description by a blank line"
    }

    fn enabled_by_default(&self) -> bool {
        true
    }

    fn evaluate(&self, parsed: &ParsedMessage, _: &RawCommit, _: &RuleConfig) -> Vec<Violation> {
        if !parsed.trailers.is_empty() && !parsed.has_blank_before_trailers {
            vec![Violation::new(
                Self::NAME,
                "Commit description and trailers must be separated by a blank line",
            )]
        } else {
            Vec::new()
        }
    }
}

/// The trailer block must contain a `Signed-off-by` line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignoffPresent;

impl SignoffPresent {
    pub const NAME: &'static str = "signoff-present";
    const KEY: &'static str = "Signed-off-by";
}

impl Rule for SignoffPresent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Message must end with a Signed-off-by trailer"
    }

    fn evaluate(&self, parsed: &ParsedMessage, _: &RawCommit, _: &RuleConfig) -> Vec<Violation> {
        if parsed
            .trailer_keys()
            .any(|key| key.eq_ignore_ascii_case(Self::KEY))
        {
            Vec::new()
        } else {
            vec![Violation::new(
                Self::NAME,
                "Commit message is missing a Signed-off-by trailer",
            )]
        }
    }
}

/// The commit must record an author name.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorNamePresent;

impl AuthorNamePresent {
    pub const NAME: &'static str = "author-name-present";
}

impl Rule for AuthorNamePresent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Commit author name must be set"
    }

    fn evaluate(&self, _: &ParsedMessage, commit: &RawCommit, _: &RuleConfig) -> Vec<Violation> {
        if is_missing(commit.author.name.as_deref()) {
            vec![Violation::new(Self::NAME, "Commit author name is missing")]
        } else {
            Vec::new()
        }
    }
}

/// The commit must record an author email.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorEmailPresent;

impl AuthorEmailPresent {
    pub const NAME: &'static str = "author-email-present";
}

impl Rule for AuthorEmailPresent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Commit author email must be set"
    }

    fn evaluate(&self, _: &ParsedMessage, commit: &RawCommit, _: &RuleConfig) -> Vec<Violation> {
        if is_missing(commit.author.email.as_deref()) {
            vec![Violation::new(Self::NAME, "Commit author email is missing")]
        } else {
            Vec::new()
        }
    }
}

/// The subject must open with a capitalized word.
///
/// This is a shape check (an upper-case letter followed by lower-case
/// letters), not grammatical mood detection. Acronyms and single-letter
/// openings are flagged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectImperativeMood;

impl SubjectImperativeMood {
    pub const NAME: &'static str = "subject-imperative-mood";
}

impl Rule for SubjectImperativeMood {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Subject must start with a capitalized verb such as 'Fix' or 'Add'"
    }

    fn evaluate(&self, parsed: &ParsedMessage, _: &RawCommit, _: &RuleConfig) -> Vec<Violation> {
        if starts_capitalized(&parsed.subject) {
            return Vec::new();
        }

        let first_word = parsed.subject.split_whitespace().next().unwrap_or("");
        vec![Violation::at(
            Self::NAME,
            format!(
                "Subject should start with a capitalized imperative verb (found '{}')",
                first_word
            ),
            1,
        )]
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn is_missing(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn starts_capitalized(subject: &str) -> bool {
    let mut chars = subject.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(first), Some(second)) if first.is_uppercase() && second.is_lowercase()
    )
}
