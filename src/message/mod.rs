// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit records and message parsing.
//!
//! A [`RawCommit`] is what a commit source hands over; a
//! [`ParsedMessage`] is the structured view the rules work on.

mod commit;
mod parser;

pub use commit::{short_sha, Author, RawCommit};
pub use parser::{trailer_key, ParsedMessage};
