// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! Rules are independent checks over a parsed message and its commit
//! metadata. A [`RuleSet`] fixes the order they run in, which is also the
//! order their violations are reported.

mod builtin;
mod ruleset;
mod violation;

pub use builtin::*;
pub use ruleset::{RuleSet, RuleStatus};
pub use violation::Violation;
