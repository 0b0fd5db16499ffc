// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commits of a GitHub pull request.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, ACCEPT, LINK};
use serde::Deserialize;
use std::time::Duration;

use crate::config::GithubConfig;
use crate::error::{ConfigError, GuardError, Result, SourceError};
use crate::message::{Author, RawCommit};

use super::CommitSource;

const USER_AGENT: &str = concat!("commit-guard/", env!("CARGO_PKG_VERSION"));

/// A pull request commit as returned by the REST API.
#[derive(Debug, Deserialize)]
struct PullCommit {
    sha: String,
    commit: CommitDetails,
}

#[derive(Debug, Deserialize)]
struct CommitDetails {
    message: Option<String>,
    author: Option<AuthorDetails>,
}

#[derive(Debug, Deserialize)]
struct AuthorDetails {
    name: Option<String>,
    email: Option<String>,
}

impl From<PullCommit> for RawCommit {
    fn from(pull: PullCommit) -> Self {
        let author = pull
            .commit
            .author
            .map(|a| Author {
                name: a.name,
                email: a.email,
            })
            .unwrap_or_default();

        RawCommit::new(pull.sha, pull.commit.message.unwrap_or_default()).with_author(author)
    }
}

/// The commits of one pull request.
#[derive(Debug, Clone)]
pub struct GithubPullRequest {
    repo: String,
    pr_number: u64,
    token: String,
    api_url: String,
    timeout: Duration,
    per_page: u32,
}

impl GithubPullRequest {
    /// Create a source for `repo` (`owner/name`) and pull request `pr_number`.
    ///
    /// The token is taken from `token` if given, otherwise from the
    /// environment variable named by `config.token_env`.
    pub fn from_config(
        repo: &str,
        pr_number: u64,
        config: &GithubConfig,
        token: Option<String>,
    ) -> Result<Self> {
        validate_repo(repo)?;

        let token = token
            .or_else(|| std::env::var(&config.token_env).ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| SourceError::MissingToken {
                env: config.token_env.clone(),
            })?;

        Ok(Self {
            repo: repo.to_string(),
            pr_number,
            token,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
            per_page: config.per_page,
        })
    }

    /// Endpoint listing the pull request's commits.
    pub fn url(&self) -> String {
        format!(
            "{}/repos/{}/pulls/{}/commits?per_page={}",
            self.api_url, self.repo, self.pr_number, self.per_page
        )
    }
}

impl CommitSource for GithubPullRequest {
    fn fetch(&self) -> Result<Vec<RawCommit>> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(SourceError::from)?;

        tracing::debug!("GET {}", self.url());
        let response = client
            .get(self.url())
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/vnd.github.v3+json")
            .send()
            .map_err(SourceError::from)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(SourceError::Api {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        // Pages past the first are never fetched, so a partial list is an error.
        if let Some(next) = next_page(response.headers()) {
            return Err(SourceError::Truncated {
                per_page: self.per_page,
                next,
            }
            .into());
        }

        let commits: Vec<PullCommit> = response.json().map_err(SourceError::from)?;
        tracing::info!("Fetched {} commit(s) from {}", commits.len(), self.describe());
        Ok(commits.into_iter().map(RawCommit::from).collect())
    }

    fn describe(&self) -> String {
        format!("{}#{}", self.repo, self.pr_number)
    }
}

/// Target of the `rel="next"` entry of a `Link` header.
fn next_page(headers: &HeaderMap) -> Option<String> {
    let links = headers.get(LINK)?.to_str().ok()?;
    links.split(',').find_map(|link| {
        let (target, params) = link.split_once(';')?;
        params
            .split(';')
            .any(|param| param.trim() == r#"rel="next""#)
            .then(|| {
                target
                    .trim()
                    .trim_start_matches('<')
                    .trim_end_matches('>')
                    .to_string()
            })
    })
}

fn validate_repo(repo: &str) -> Result<()> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(())
        }
        _ => Err(GuardError::Config(ConfigError::InvalidValue {
            key: "repo".to_string(),
            message: format!("expected 'owner/name', got '{}'", repo),
        })),
    }
}
