// SPDX-License-Identifier: MIT OR Apache-2.0
//! # deepassert
//!
//! Structural equality assertions for nested data with "don't care" regions.
//!
//! Build the expected value with [`pattern!`], embedding wildcard markers
//! wherever any value of a given shape is acceptable. On mismatch the
//! failure message carries a path-qualified diff.
//!
//! ```
//! use deepassert::{ANY_BUT_NONE, ANY_DICT, assert_equal, pattern};
//!
//! assert_equal(
//!     pattern!({"a": 1, "b": ANY_BUT_NONE, "c": ANY_DICT}),
//!     pattern!({"a": 1, "b": 2, "c": {}}),
//! );
//! ```
//!
//! ```should_panic
//! use deepassert::{assert_equal, pattern};
//!
//! // panics with:
//! // Details:
//! // Value of root['a'] changed from 1 to 2.
//! assert_equal(pattern!({"a": 1}), pattern!({"a": 2}));
//! ```
//!
//! ## Markers
//!
//! | Marker | Matches |
//! |--------|---------|
//! | [`ANY`] | anything, including `null` |
//! | [`ANY_BUT_NONE`] | anything except `null` |
//! | [`ANY_DICT`] | any mapping |
//! | [`ANY_LIST`] | any list (never a string) |
//! | [`ANY_STRING`] | any string |
//! | `approx(x)` | numbers close to `x` (feature `approx`) |
//!
//! ## Crates
//!
//! - [`deepassert-core`](https://docs.rs/deepassert-core) - Nodes, markers and paths
//! - [`deepassert-diff`](https://docs.rs/deepassert-diff) - Diff engine and report generator

#![doc(html_root_url = "https://docs.rs/deepassert/0.1.0")]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

/// Assertion helpers
pub mod assert;
mod explain;

pub use assert::{
    AssertionFailure, assert_equal, assert_mappings_equal, check_equal, check_mappings_equal,
};
#[doc(hidden)]
pub use explain::assert_deep_eq_failed as __assert_deep_eq_failed;
pub use explain::{EXPLAIN_HEADER, explain};

#[cfg(feature = "approx")]
pub use deepassert_core::{Approx, approx};
pub use deepassert_core::{
    ANY, ANY_BUT_NONE, ANY_DICT, ANY_LIST, ANY_STRING, CoreError, Mapping, Marker, MarkerKind,
    Node, Path, PathSegment, Wildcard, pattern,
};
pub use deepassert_diff::{
    DiffOptions, REPORT_UNAVAILABLE, generate_diff_report, generate_diff_report_lines,
};

/// Re-export of deepassert-diff for the engine and override hook.
pub use deepassert_diff as diff;
