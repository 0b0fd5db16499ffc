// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commit-guard.
//!
//! Rule violations are never errors: they travel through the normal
//! verdict path. The types here cover the conditions that stop a run
//! before or instead of evaluation: bad configuration and failing
//! commit sources.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commit-guard operations.
#[derive(Error, Debug)]
pub enum GuardError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Commit source errors
    #[error("Commit source error: {0}")]
    Source(#[from] SourceError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Unknown rule: '{name}'")]
    UnknownRule { name: String },

    #[error("Configuration file already exists: {path} (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },
}

/// Errors raised while fetching commits to validate.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("No token found in ${env} to fetch the commits")]
    MissingToken { env: String },

    #[error("HTTP request failed: {message}")]
    Http { message: String },

    #[error("Failed to fetch PR commits: {status} {message}")]
    Api { status: u16, message: String },

    #[error("Incomplete commit list: more than {per_page} commits, next page at {next}")]
    Truncated { per_page: u32, next: String },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Not a git repository")]
    NotARepository,

    #[error("Git operation failed: {message}")]
    Git { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },
}

impl From<git2::Error> for SourceError {
    fn from(err: git2::Error) -> Self {
        SourceError::Git {
            message: err.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SourceError::Decode {
                message: err.to_string(),
            }
        } else {
            SourceError::Http {
                message: err.to_string(),
            }
        }
    }
}

/// Result type alias for commit-guard operations.
pub type Result<T> = std::result::Result<T, GuardError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| GuardError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config"),
        };
        assert!(err.to_string().contains("/path/to/config"));
    }

    #[test]
    fn test_api_error_display() {
        let err = SourceError::Api {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to fetch PR commits: 404 Not Found");
    }

    #[test]
    fn test_truncated_display() {
        let err = SourceError::Truncated {
            per_page: 100,
            next: "https://api.github.com/x?page=2".to_string(),
        };
        assert!(err.to_string().contains("more than 100 commits"));
    }

    #[test]
    fn test_missing_token_names_variable() {
        let err = SourceError::MissingToken {
            env: "GITHUB_TOKEN".to_string(),
        };
        assert!(err.to_string().contains("$GITHUB_TOKEN"));
    }

    #[test]
    fn test_guard_error_from_config_error() {
        let config_err = ConfigError::UnknownRule {
            name: "no-such-rule".to_string(),
        };
        let err: GuardError = config_err.into();
        assert!(err.to_string().contains("no-such-rule"));
    }

    #[test]
    fn test_context() {
        let io: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let err = io.context("reading message").unwrap_err();
        assert_eq!(err.to_string(), "reading message: gone");
    }
}
