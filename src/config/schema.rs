// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from
//! commit-guard.toml.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ConfigError;

/// Default maximum subject length.
pub const DEFAULT_SUB_LIMIT: usize = 50;

/// Default maximum description line length.
pub const DEFAULT_DESC_LIMIT: usize = 72;

/// Largest page the GitHub commits endpoint serves.
pub const MAX_PER_PAGE: u32 = 100;

/// The main configuration structure for commit-guard.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GuardConfig {
    /// Rule configuration.
    pub rules: RuleConfig,

    /// GitHub API configuration.
    pub github: GithubConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

impl GuardConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Rule configuration: limits plus per-rule enable switches.
///
/// Held immutable for the duration of a batch run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    /// Maximum subject length, in characters.
    pub sub_limit: usize,

    /// Maximum description line length, in characters.
    pub desc_limit: usize,

    /// Explicit enable/disable switches keyed by rule name. Rules not
    /// listed keep their default status.
    pub enabled: BTreeMap<String, bool>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            sub_limit: DEFAULT_SUB_LIMIT,
            desc_limit: DEFAULT_DESC_LIMIT,
            enabled: BTreeMap::new(),
        }
    }
}

impl RuleConfig {
    /// Whether the named rule runs, given its default status.
    pub fn is_enabled(&self, rule: &str, default: bool) -> bool {
        self.enabled.get(rule).copied().unwrap_or(default)
    }

    /// Force a rule on or off.
    pub fn set_enabled(&mut self, rule: impl Into<String>, enabled: bool) {
        self.enabled.insert(rule.into(), enabled);
    }

    /// Builder-style variant of [`RuleConfig::set_enabled`].
    pub fn with_rule(mut self, rule: impl Into<String>, enabled: bool) -> Self {
        self.set_enabled(rule, enabled);
        self
    }

    /// Check the numeric parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sub_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "sub_limit".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.desc_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "desc_limit".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// GitHub API configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GithubConfig {
    /// Base URL of the REST API.
    pub api_url: String,

    /// Environment variable holding the access token.
    pub token_env: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Commits requested per page.
    pub per_page: u32,
}

impl GithubConfig {
    /// Check the request parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_PER_PAGE).contains(&self.per_page) {
            return Err(ConfigError::InvalidValue {
                key: "github.per_page".to_string(),
                message: format!("must be between 1 and {}", MAX_PER_PAGE),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "github.timeout_secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            timeout_secs: 30,
            per_page: 100,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format.
    pub format: OutputFormat,

    /// Whether to use colors.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// Output format for CI and scripting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON lines for machine parsing
    Json,
}
