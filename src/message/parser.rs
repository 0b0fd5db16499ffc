// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message parsing.
//!
//! Parsing is total: every input, including the empty string, yields a
//! [`ParsedMessage`]. A missing subject or body is something for the rules
//! to report, not a parse failure.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A `Key: value` trailer line such as `Signed-off-by: Name <email>`.
    static ref TRAILER_REGEX: Regex = Regex::new(r"^([A-Za-z][A-Za-z-]*):\s").unwrap();

    /// CRLF, bare CR and LF all end a line.
    static ref LINE_BREAK: Regex = Regex::new(r"\r\n|\r|\n").unwrap();
}

/// A commit message split into subject, body and trailer block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMessage {
    /// First line of the message.
    pub subject: String,
    /// Whether the second line exists and is blank.
    pub has_blank_after_subject: bool,
    /// Description lines, with leading and trailing blank lines removed.
    pub body: Vec<String>,
    /// Zero-based index of `body[0]` in the original message.
    pub body_offset: usize,
    /// Trailing run of `Key: value` lines, in original order.
    pub trailers: Vec<String>,
    /// Whether a blank line directly precedes the trailer block.
    pub has_blank_before_trailers: bool,
}

impl ParsedMessage {
    /// Parse a raw commit message.
    pub fn parse(raw: &str) -> Self {
        let lines: Vec<&str> = LINE_BREAK.split(raw).collect();

        let subject = lines.first().copied().unwrap_or_default().to_string();

        // Trailing blank lines are padding, not content.
        let end = lines
            .iter()
            .rposition(|line| !is_blank(line))
            .map_or(1, |idx| idx + 1)
            .max(1);

        let has_blank_after_subject = end > 1 && is_blank(lines[1]);

        // The trailer block never swallows the subject.
        let mut trailer_start = end;
        while trailer_start > 1 && is_trailer(lines[trailer_start - 1]) {
            trailer_start -= 1;
        }
        let trailers: Vec<String> = lines[trailer_start..end]
            .iter()
            .map(|line| line.to_string())
            .collect();

        let has_blank_before_trailers =
            !trailers.is_empty() && trailer_start >= 2 && is_blank(lines[trailer_start - 1]);

        let body_start = if has_blank_after_subject { 2 } else { 1 };
        let body_end = if has_blank_before_trailers {
            trailer_start - 1
        } else {
            trailer_start
        };

        let mut start = body_start;
        let mut stop = body_end.max(body_start);
        while start < stop && is_blank(lines[start]) {
            start += 1;
        }
        while stop > start && is_blank(lines[stop - 1]) {
            stop -= 1;
        }

        let body = lines[start..stop]
            .iter()
            .map(|line| line.to_string())
            .collect();

        Self {
            subject,
            has_blank_after_subject,
            body,
            body_offset: start,
            trailers,
            has_blank_before_trailers,
        }
    }

    /// One-based line number of a body line in the original message.
    pub fn body_line_number(&self, index: usize) -> usize {
        self.body_offset + index + 1
    }

    /// Keys of all trailer lines, in order.
    pub fn trailer_keys(&self) -> impl Iterator<Item = &str> {
        self.trailers.iter().filter_map(|line| trailer_key(line))
    }

    /// Whether the message has no subject, body or trailers at all.
    pub fn is_empty(&self) -> bool {
        self.subject.trim().is_empty() && self.body.is_empty() && self.trailers.is_empty()
    }
}

/// Key of a trailer line, or `None` if the line is not a trailer.
pub fn trailer_key(line: &str) -> Option<&str> {
    TRAILER_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn is_trailer(line: &str) -> bool {
    TRAILER_REGEX.is_match(line)
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
