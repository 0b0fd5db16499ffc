// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Raw commit records.

use serde::{Deserialize, Serialize};

/// Identity recorded as the author of a commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Author name, if the source knows it.
    pub name: Option<String>,
    /// Author email, if the source knows it.
    pub email: Option<String>,
}

impl Author {
    /// Create an author with both fields set.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// A commit as supplied by a commit source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    /// Commit SHA (or another identifier for messages that are not commits yet).
    pub sha: String,
    /// The full, unprocessed commit message.
    #[serde(default)]
    pub message: String,
    /// Commit author.
    #[serde(default)]
    pub author: Author,
}

impl RawCommit {
    /// Create a commit record without author information.
    pub fn new(sha: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            message: message.into(),
            author: Author::default(),
        }
    }

    /// Set the author.
    pub fn with_author(mut self, author: Author) -> Self {
        self.author = author;
        self
    }

    /// Abbreviated SHA for display.
    pub fn short_sha(&self) -> &str {
        short_sha(&self.sha)
    }
}

/// First seven characters of a hex SHA. Other identifiers, such as the
/// path of a message file, are returned unchanged.
pub fn short_sha(sha: &str) -> &str {
    if sha.len() > 7 && sha.chars().all(|c| c.is_ascii_hexdigit()) {
        &sha[..7]
    } else {
        sha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_sha() {
        let commit = RawCommit::new("0123456789abcdef", "msg");
        assert_eq!(commit.short_sha(), "0123456");
        assert_eq!(short_sha("abc"), "abc");
        assert_eq!(short_sha("/tmp/COMMIT_EDITMSG"), "/tmp/COMMIT_EDITMSG");
    }

    #[test]
    fn test_deserialize_missing_message() {
        let commit: RawCommit = serde_json::from_str(r#"{"sha": "abc"}"#).unwrap();
        assert_eq!(commit.message, "");
        assert_eq!(commit.author, Author::default());
    }
}
