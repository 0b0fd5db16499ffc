// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{OutputFormat, RuleConfig};
use crate::rules::SubjectBodySeparator;

/// commit-guard - commit message validation
///
/// Checks subject length, description, blank-line separators, sign-off
/// trailers and author identity for every commit of a pull request or
/// local range. Exits 0 when all commits pass, 1 when any fails and 2 on
/// configuration or fetch errors.
#[derive(Parser, Debug)]
#[command(name = "commit-guard")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Validate commit messages before merge", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Number of worker threads used to evaluate commits
    #[arg(short, long, global = true, default_value_t = 1, env = "COMMIT_GUARD_JOBS")]
    pub jobs: usize,

    /// Stop at the first failing commit
    #[arg(long, global = true)]
    pub fail_fast: bool,

    #[command(flatten)]
    pub rules: RuleArgs,
}

/// Rule options. Each overrides the configuration file.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct RuleArgs {
    /// Maximum subject length in characters [default: 50]
    #[arg(long, global = true, value_name = "CHARS", env = "COMMIT_GUARD_SUB_LIMIT")]
    pub sub_limit: Option<usize>,

    /// Maximum description line length in characters [default: 72]
    #[arg(long, global = true, value_name = "CHARS", env = "COMMIT_GUARD_DESC_LIMIT")]
    pub desc_limit: Option<usize>,

    /// Require a blank line between subject and description
    #[arg(
        long,
        global = true,
        value_name = "BOOL",
        action = ArgAction::Set,
        value_parser = clap::builder::BoolishValueParser::new(),
        env = "COMMIT_GUARD_CHECK_BLANK_LINE"
    )]
    pub check_blank_line: Option<bool>,

    /// Enable rules by name (comma separated)
    #[arg(
        long,
        global = true,
        value_name = "RULE",
        value_delimiter = ',',
        env = "COMMIT_GUARD_ENABLE"
    )]
    pub enable: Vec<String>,

    /// Disable rules by name (comma separated)
    #[arg(
        long,
        global = true,
        value_name = "RULE",
        value_delimiter = ',',
        env = "COMMIT_GUARD_DISABLE"
    )]
    pub disable: Vec<String>,
}

impl RuleArgs {
    /// Layer these options over a loaded rule configuration.
    pub fn apply(&self, config: &mut RuleConfig) {
        if let Some(limit) = self.sub_limit {
            config.sub_limit = limit;
        }
        if let Some(limit) = self.desc_limit {
            config.desc_limit = limit;
        }
        if let Some(check) = self.check_blank_line {
            config.set_enabled(SubjectBodySeparator::NAME, check);
        }
        for name in self.enable.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
            config.set_enabled(name, true);
        }
        for name in self.disable.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
            config.set_enabled(name, false);
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the commits of a GitHub pull request
    ///
    /// Exits 0 when every commit passes, 1 when any commit fails and 2 when
    /// the commits cannot be fetched in full or the configuration is invalid.
    Pr(PrArgs),

    /// Validate commits from a local repository
    Range(RangeArgs),

    /// Validate a single message file (for use as a commit-msg hook)
    File(FileArgs),

    /// List rules and whether they are enabled
    Rules,

    /// Write an example configuration file
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the pr command.
#[derive(Parser, Debug, Clone)]
pub struct PrArgs {
    /// Repository as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repo: String,

    /// Pull request number
    #[arg(long)]
    pub pr_number: u64,

    /// Base URL of the GitHub API
    #[arg(long)]
    pub api_url: Option<String>,

    /// Access token (defaults to the variable named by github.token_env)
    #[arg(long)]
    pub token: Option<String>,
}

/// Arguments for the range command.
#[derive(Parser, Debug, Clone)]
pub struct RangeArgs {
    /// Revision or range to check, e.g. main..HEAD
    #[arg(default_value = "HEAD")]
    pub range: String,

    /// Path inside the repository
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}

/// Arguments for the file command.
#[derive(Parser, Debug, Clone)]
pub struct FileArgs {
    /// Message file, or - for stdin
    pub path: PathBuf,

    /// Keep '#' comment lines instead of stripping them
    #[arg(long)]
    pub verbatim: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Where to write the configuration
    #[arg(long, default_value = "commit-guard.toml")]
    pub path: PathBuf,
}
