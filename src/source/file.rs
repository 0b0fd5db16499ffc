// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Single messages read from a file or stdin.
//!
//! This is the `commit-msg` hook path: git passes the path of the message
//! being written, before the commit object (and its SHA) exists.

use std::io::Read;
use std::path::PathBuf;

use crate::error::{Result, ResultExt};
use crate::message::RawCommit;

use super::CommitSource;

/// Marker line below which git ignores the message in verbose commits.
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// A commit message stored in a file; `-` reads stdin.
#[derive(Debug, Clone)]
pub struct MessageFile {
    path: PathBuf,
    strip_comments: bool,
}

impl MessageFile {
    /// Read the message at `path`, dropping `#` comment lines.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            strip_comments: true,
        }
    }

    /// Keep comment lines verbatim.
    pub fn strip_comments(mut self, strip: bool) -> Self {
        self.strip_comments = strip;
        self
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    fn read(&self) -> Result<String> {
        if self.is_stdin() {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read message from stdin")?;
            Ok(content)
        } else {
            std::fs::read_to_string(&self.path)
                .context(format!("Failed to read {}", self.path.display()))
        }
    }
}

impl CommitSource for MessageFile {
    fn fetch(&self) -> Result<Vec<RawCommit>> {
        let content = self.read()?;
        let message = if self.strip_comments {
            strip_comment_lines(&content)
        } else {
            content
        };

        Ok(vec![RawCommit::new(self.describe(), message)])
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            "(stdin)".to_string()
        } else {
            self.path.display().to_string()
        }
    }
}

/// Drop comment lines the way `git commit --cleanup=strip` does.
fn strip_comment_lines(content: &str) -> String {
    content
        .lines()
        .take_while(|line| *line != SCISSORS)
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fetch_strips_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(
            &path,
            "Fix bug\n\nBody\n# Please enter the commit message\n# ------------------------ >8 ------------------------\ndiff --git a/x b/x\n",
        )
        .unwrap();

        let commits = MessageFile::new(&path).fetch().unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].message, "Fix bug\n\nBody");
        assert_eq!(commits[0].sha, path.display().to_string());
    }

    #[test]
    fn test_fetch_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("msg");
        std::fs::write(&path, "Fix bug\n# kept\n").unwrap();

        let commits = MessageFile::new(&path).strip_comments(false).fetch().unwrap();
        assert_eq!(commits[0].message, "Fix bug\n# kept\n");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(MessageFile::new(dir.path().join("missing")).fetch().is_err());
    }
}
