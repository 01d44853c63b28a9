// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types for deepassert
//!
//! This crate provides the comparison operands shared across the deepassert crates:
//!
//! - [`node`] - The [`Node`] operand type and its conversions
//! - [`marker`] - Wildcard markers ([`ANY`], [`ANY_BUT_NONE`], [`ANY_DICT`], [`ANY_LIST`], [`ANY_STRING`])
//! - [`approx`] - Approximate numeric marker (feature `approx`)
//! - [`path`] - Traversal paths rendered as `root['key'][0]`
//! - [`error`] - Error types and Result alias
//!
//! Expected values are ordinary nested data with markers embedded as leaves:
//!
//! ```
//! use deepassert_core::{ANY_BUT_NONE, ANY_DICT, pattern};
//!
//! let expected = pattern!({"a": 1, "b": ANY_BUT_NONE, "c": ANY_DICT});
//! let actual = pattern!({"a": 1, "b": 2, "c": {}});
//! assert!(expected == actual);
//! ```

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

/// Approximate numeric comparison marker
#[cfg(feature = "approx")]
pub mod approx;
/// Error types for deepassert operations
pub mod error;
mod macros;
/// Wildcard markers
pub mod marker;
/// Comparison operand type
pub mod node;
/// Traversal paths
pub mod path;

#[cfg(feature = "approx")]
pub use approx::{Approx, DEFAULT_ABS_TOLERANCE, DEFAULT_REL_TOLERANCE, approx};
pub use error::{CoreError, Result};
pub use marker::{ANY, ANY_BUT_NONE, ANY_DICT, ANY_LIST, ANY_STRING, Marker, MarkerKind, Wildcard};
pub use node::{Mapping, Node, numbers_equal};
pub use path::{Path, PathSegment};
