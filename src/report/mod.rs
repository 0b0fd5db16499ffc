// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Human and machine readable reporting of verdicts.

use console::style;
use std::io::Write;

use crate::config::OutputFormat;
use crate::engine::{Summary, Verdict};
use crate::error::Result;
use crate::rules::RuleStatus;

/// Writes verdicts and summaries in the selected format.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    format: OutputFormat,
    out: W,
}

impl Reporter<std::io::Stdout> {
    /// Report to stdout.
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(format, std::io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self { format, out }
    }

    /// Report one verdict as soon as it is available.
    pub fn verdict(&mut self, verdict: &Verdict) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "sha": verdict.sha,
                    "subject": verdict.subject,
                    "passed": verdict.passed(),
                    "violations": verdict.violations,
                });
                writeln!(self.out, "{}", json)?;
            }
            OutputFormat::Text => {
                let status = if verdict.passed() {
                    style("✓").green().bold()
                } else {
                    style("✗").red().bold()
                };
                writeln!(
                    self.out,
                    "{} {} {}",
                    status,
                    style(verdict.short_sha()).cyan(),
                    verdict.subject
                )?;

                for violation in &verdict.violations {
                    let location = violation
                        .line
                        .map(|line| format!(" (line {})", line))
                        .unwrap_or_default();
                    writeln!(
                        self.out,
                        "  {} {}{} {}",
                        style("-").red(),
                        style(&violation.rule).red(),
                        style(location).dim(),
                        violation.message
                    )?;
                }
            }
        }
        Ok(())
    }

    /// Report the batch summary.
    pub fn summary(&mut self, summary: &Summary) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "summary": {
                        "total": summary.total,
                        "failed": summary.failed,
                        "failing_shas": summary.failing_shas,
                        "passed": summary.passed(),
                    }
                });
                writeln!(self.out, "{}", json)?;
            }
            OutputFormat::Text => {
                writeln!(self.out)?;
                if summary.passed() {
                    writeln!(
                        self.out,
                        "{} All {} commit(s) passed validation.",
                        style("✓").green().bold(),
                        summary.total
                    )?;
                } else {
                    writeln!(
                        self.out,
                        "{} {} of {} commit(s) failed validation.",
                        style("✗").red().bold(),
                        summary.failed,
                        summary.total
                    )?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// List rules with their default and effective status.
    pub fn rules(&mut self, statuses: &[RuleStatus]) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                writeln!(self.out, "{}", serde_json::json!(statuses))?;
            }
            OutputFormat::Text => {
                let width = statuses.iter().map(|s| s.name.len()).max().unwrap_or(0);
                for status in statuses {
                    let marker = if status.enabled {
                        style("on ").green()
                    } else {
                        style("off").dim()
                    };
                    let default = if status.default { "" } else { " (opt-in)" };
                    writeln!(
                        self.out,
                        "{} {:<width$}  {}{}",
                        marker,
                        status.name,
                        status.description,
                        style(default).dim(),
                        width = width
                    )?;
                }
            }
        }
        Ok(())
    }

    /// Consume the reporter and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
