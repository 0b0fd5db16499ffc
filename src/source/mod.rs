// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit sources.
//!
//! A source produces the complete list of commits to validate, or fails.
//! The engine is never run on a partial fetch.

mod file;
mod git;
mod github;

pub use file::MessageFile;
pub use git::GitRange;
pub use github::GithubPullRequest;

use crate::error::Result;
use crate::message::RawCommit;

/// Something that can supply commits for validation.
pub trait CommitSource {
    /// Fetch every commit, in the order they should be reported.
    fn fetch(&self) -> Result<Vec<RawCommit>>;

    /// Short human-readable description, for logs.
    fn describe(&self) -> String;
}
