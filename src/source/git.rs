// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commits from a local git repository.

use git2::{Commit, Oid, Repository, Sort};
use std::path::PathBuf;

use crate::error::{GuardError, Result, SourceError};
use crate::message::{Author, RawCommit};

use super::CommitSource;

/// A revision or `from..to` range in a local repository.
#[derive(Debug, Clone)]
pub struct GitRange {
    path: PathBuf,
    range: String,
}

impl GitRange {
    /// Create a source for `range` in the repository containing `path`.
    pub fn new(path: impl Into<PathBuf>, range: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            range: range.into(),
        }
    }

    fn open(&self) -> Result<Repository> {
        Repository::discover(&self.path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GuardError::Source(SourceError::NotARepository)
            } else {
                GuardError::Source(e.into())
            }
        })
    }

    fn resolve(repo: &Repository, reference: &str) -> Result<Oid> {
        let obj = repo.revparse_single(reference).map_err(|e| {
            GuardError::Source(SourceError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            GuardError::Source(SourceError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit.id())
    }

    /// Commits in `from..to`, oldest first.
    fn walk(repo: &Repository, from: &str, to: &str) -> Result<Vec<Oid>> {
        let to = if to.is_empty() { "HEAD" } else { to };
        let from = Self::resolve(repo, from)?;
        let to = Self::resolve(repo, to)?;

        let mut revwalk = repo.revwalk().map_err(SourceError::from)?;
        revwalk
            .set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)
            .map_err(SourceError::from)?;
        revwalk.push(to).map_err(SourceError::from)?;
        revwalk.hide(from).map_err(SourceError::from)?;

        let oids = revwalk
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(SourceError::from)?;
        Ok(oids)
    }
}

impl CommitSource for GitRange {
    fn fetch(&self) -> Result<Vec<RawCommit>> {
        // `A...B` means the symmetric difference, which includes commits that
        // are not on the branch being checked.
        if self.range.contains("...") {
            return Err(SourceError::InvalidReference {
                reference: format!(
                    "{}: symmetric ranges are not supported, use A..B",
                    self.range
                ),
            }
            .into());
        }

        let repo = self.open()?;

        let oids = match self.range.split_once("..") {
            Some((from, to)) => Self::walk(&repo, from, to)?,
            None => vec![Self::resolve(&repo, &self.range)?],
        };

        let mut commits = Vec::with_capacity(oids.len());
        for oid in oids {
            let commit = repo.find_commit(oid).map_err(|e| {
                GuardError::Source(SourceError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            commits.push(to_raw_commit(&commit));
        }

        tracing::info!("Found {} commit(s) in {}", commits.len(), self.range);
        Ok(commits)
    }

    fn describe(&self) -> String {
        format!("{} in {}", self.range, self.path.display())
    }
}

fn to_raw_commit(commit: &Commit<'_>) -> RawCommit {
    let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();
    let signature = commit.author();
    let author = Author {
        name: signature.name().map(str::to_string),
        email: signature.email().map(str::to_string),
    };

    RawCommit::new(commit.id().to_string(), message).with_author(author)
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;
    use tempfile::TempDir;

    fn create_test_repo(messages: &[&str]) -> (TempDir, Vec<Oid>) {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let sig = Signature::now("A Author", "a@x.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let mut oids: Vec<Oid> = Vec::new();
        for message in messages {
            let parent = oids.last().map(|oid| repo.find_commit(*oid).unwrap());
            let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
            let oid = repo
                .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
                .unwrap();
            oids.push(oid);
        }

        (dir, oids)
    }

    #[test]
    fn test_range_is_oldest_first() {
        let (dir, oids) = create_test_repo(&["Initial commit", "Second\n\nBody", "Third\n\nBody"]);

        let commits = GitRange::new(dir.path(), "HEAD~2..HEAD").fetch().unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].sha, oids[1].to_string());
        assert_eq!(commits[1].sha, oids[2].to_string());
        assert_eq!(commits[0].message, "Second\n\nBody");
        assert_eq!(commits[0].author, Author::new("A Author", "a@x.com"));
    }

    #[test]
    fn test_open_ended_range_defaults_to_head() {
        let (dir, _) = create_test_repo(&["Initial commit", "Second\n\nBody"]);
        let commits = GitRange::new(dir.path(), "HEAD~1..").fetch().unwrap();
        assert_eq!(commits.len(), 1);
    }

    #[test]
    fn test_single_revision() {
        let (dir, oids) = create_test_repo(&["Initial commit"]);
        let commits = GitRange::new(dir.path(), "HEAD").fetch().unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].sha, oids[0].to_string());
    }

    #[test]
    fn test_invalid_reference() {
        let (dir, _) = create_test_repo(&["Initial commit"]);
        let result = GitRange::new(dir.path(), "no-such-branch").fetch();
        assert!(matches!(
            result,
            Err(GuardError::Source(SourceError::InvalidReference { .. }))
        ));
    }

    #[test]
    fn test_symmetric_range_is_rejected() {
        let (dir, _) = create_test_repo(&["Initial commit", "Second\n\nBody"]);
        match GitRange::new(dir.path(), "HEAD~1...HEAD").fetch() {
            Err(GuardError::Source(SourceError::InvalidReference { reference })) => {
                assert!(reference.starts_with("HEAD~1...HEAD"));
                assert!(reference.contains("A..B"));
            }
            other => panic!("expected invalid reference, got {:?}", other),
        }
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = GitRange::new(dir.path(), "HEAD").fetch();
        assert!(matches!(
            result,
            Err(GuardError::Source(SourceError::NotARepository))
        ));
    }
}
