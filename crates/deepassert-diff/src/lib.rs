// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Wildcard-aware structural diff
//!
//! Explains why two [`Node`](deepassert_core::Node) trees differ, one
//! path-qualified line per mismatch:
//!
//! ```text
//! Value of root['a'] changed from 1 to 2.
//! Item root['d'] added to dictionary.
//! Value of root['c'] does not match ANY_DICT (got null).
//! ```
//!
//! The module is split in three layers:
//!
//! ## Engine
//! [`DeepDiff`] walks both trees depth-first. Lists align by index, or as
//! multisets with [`DiffOptions::ignore_order`]. Before the default
//! structural comparison of any node pair, every installed
//! [`ComparisonOverride`] gets a chance to decide equality itself.
//!
//! ## Override hook
//! [`MarkerOperator`] is the override that makes markers work: whenever
//! either side of a pair is a recognized marker, the marker's predicate
//! decides and the engine does not descend.
//!
//! ## Report generator
//! [`generate_diff_report`] and [`generate_diff_report_lines`] install the
//! marker operator, run the engine and render the result. They never fail:
//! engine errors are logged at debug level and replaced with
//! [`REPORT_UNAVAILABLE`] (or `None`).

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

mod engine;
mod error;
mod model;
mod operator;
mod report;

pub use engine::{DEFAULT_MAX_DEPTH, DeepDiff, DiffOptions};
pub use error::DiffError;
pub use model::{Diff, DiffItem, DiffKind};
pub use operator::{ComparisonOverride, MarkerKinds, MarkerOperator};
pub use report::{
    REPORT_UNAVAILABLE, generate_diff_report, generate_diff_report_lines,
    try_generate_diff_report,
};
