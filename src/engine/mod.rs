// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit evaluation and batch aggregation.
//!
//! Evaluation is pure: no wall clock, no randomness and no state carried
//! between commits. Only [`Summary`] accumulates across a batch.

mod batch;
mod evaluator;
mod verdict;

pub use batch::BatchValidator;
pub use evaluator::{evaluate, CommitEvaluator};
pub use verdict::{Summary, Verdict};
