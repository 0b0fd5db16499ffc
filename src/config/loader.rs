// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Locating and reading commit-guard.toml.
//!
//! Unknown keys in any section are a parse error.

use crate::error::{ConfigError, GuardError, Result};
use std::path::{Path, PathBuf};

use super::schema::GuardConfig;

/// Checked in each directory, first match wins.
const CONFIG_FILES: &[&str] = &[
    "commit-guard.toml",
    ".commit-guard.toml",
    ".config/commit-guard.toml",
];

/// [`find_config_file_from`] the working directory.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Walk up from `start_dir`, then try the home directory and
/// `$XDG_CONFIG_HOME/commit-guard/config.toml`.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let in_tree = start_dir
        .ancestors()
        .flat_map(|dir| CONFIG_FILES.iter().map(move |name| dir.join(name)));
    let in_home = dirs::home_dir()
        .into_iter()
        .flat_map(|home| CONFIG_FILES.iter().map(move |name| home.join(name)));
    let in_xdg = dirs::config_dir().map(|dir| dir.join("commit-guard").join("config.toml"));

    in_tree
        .chain(in_home)
        .chain(in_xdg)
        .find(|candidate| candidate.is_file())
}

/// Discovered configuration, or the defaults when there is none.
pub fn load_config() -> Result<GuardConfig> {
    let Some(path) = find_config_file() else {
        tracing::debug!("No configuration file, using defaults");
        return Ok(GuardConfig::default());
    };
    load_config_from(&path)
}

/// Read the file at `path`; a missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<GuardConfig> {
    tracing::debug!("Loading configuration from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::ParseError {
            message: format!("{}: {}", path.display(), e),
        },
    })?;

    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<GuardConfig> {
    toml::from_str(content).map_err(|e| {
        GuardError::Config(ConfigError::ParseError {
            message: e.to_string(),
        })
    })
}
