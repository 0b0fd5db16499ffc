// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commit-guard.
//!
//! This module handles loading and parsing configuration files. Command
//! line and environment overrides are layered on top by the CLI.

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, example_config};
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
