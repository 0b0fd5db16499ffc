// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::config::{GuardConfig, OutputFormat, RuleConfig};
use crate::engine::BatchValidator;
use crate::error::{ConfigError, GuardError, Result};
use crate::message::RawCommit;
use crate::report::Reporter;
use crate::rules::RuleSet;
use crate::source::{CommitSource, GitRange, GithubPullRequest, MessageFile};

use super::args::{Cli, Commands, InitArgs};

/// Run the CLI with the given arguments.
///
/// Returns `Ok(true)` when every validated commit passed.
pub fn run(cli: Cli) -> Result<bool> {
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    // Commands that do not need a configuration
    match &cli.command {
        Commands::Init(args) => return run_init(args),
        Commands::Version => return run_version(),
        _ => {}
    }

    let mut config = if let Some(config_path) = &cli.config {
        GuardConfig::load_from(config_path)?
    } else {
        GuardConfig::load()?
    };
    cli.rules.apply(&mut config.rules);

    // Reject bad configuration before anything is fetched
    let rules = RuleSet::standard();
    rules.check_config(&config.rules)?;
    config.github.validate()?;

    if !config.output.color {
        console::set_colors_enabled(false);
    }
    let format = cli.format.unwrap_or(config.output.format);

    match &cli.command {
        Commands::Pr(args) => {
            tracing::debug!("Running pr command with args: {:?}", args.repo);
            let mut github = config.github.clone();
            if let Some(ref api_url) = args.api_url {
                github.api_url = api_url.clone();
            }
            let source = GithubPullRequest::from_config(
                &args.repo,
                args.pr_number,
                &github,
                args.token.clone(),
            )?;
            run_validation(&cli, &rules, &config.rules, format, &source)
        }
        Commands::Range(args) => {
            tracing::debug!("Running range command with args: {:?}", args);
            let source = GitRange::new(&args.path, &args.range);
            run_validation(&cli, &rules, &config.rules, format, &source)
        }
        Commands::File(args) => {
            tracing::debug!("Running file command with args: {:?}", args);
            let source = MessageFile::new(&args.path).strip_comments(!args.verbatim);
            run_validation(&cli, &rules, &config.rules, format, &source)
        }
        Commands::Rules => {
            Reporter::stdout(format).rules(&rules.statuses(&config.rules))?;
            Ok(true)
        }
        Commands::Init(_) | Commands::Version => Ok(true),
    }
}

/// Fetch commits from `source`, validate them and report as we go.
fn run_validation(
    cli: &Cli,
    rules: &RuleSet,
    config: &RuleConfig,
    format: OutputFormat,
    source: &dyn CommitSource,
) -> Result<bool> {
    let commits = fetch(source, format)?;
    if commits.is_empty() {
        tracing::warn!("No commits found in {}", source.describe());
    }

    let mut reporter = Reporter::stdout(format);
    let mut write_error: Option<GuardError> = None;

    let summary = BatchValidator::new(rules, config)
        .jobs(cli.jobs)
        .fail_fast(cli.fail_fast)
        .run(&commits, |verdict| {
            if write_error.is_none() {
                write_error = reporter.verdict(verdict).err();
            }
        });

    if let Some(err) = write_error {
        return Err(err);
    }
    reporter.summary(&summary)?;

    Ok(summary.passed())
}

/// Fetch with a spinner on interactive terminals.
fn fetch(source: &dyn CommitSource, format: OutputFormat) -> Result<Vec<RawCommit>> {
    let spinner = match format {
        OutputFormat::Text => ProgressBar::new_spinner(),
        OutputFormat::Json => ProgressBar::hidden(),
    };
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Fetching commits from {}", source.describe()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = source.fetch();
    spinner.finish_and_clear();
    result
}

/// Run the version command.
fn run_version() -> Result<bool> {
    println!("commit-guard {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(true)
}

/// Run the init command.
fn run_init(args: &InitArgs) -> Result<bool> {
    use crate::config::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    if args.path.exists() && !args.force {
        return Err(GuardError::Config(ConfigError::AlreadyExists {
            path: args.path.clone(),
        }));
    }

    std::fs::write(&args.path, example_config()).map_err(|e| GuardError::WithContext {
        context: "init".to_string(),
        message: format!("Failed to write configuration: {}", e),
    })?;

    println!("✓ Created {}", args.path.display());

    Ok(true)
}
