// SPDX-License-Identifier: MIT OR Apache-2.0
//! Equality checks that explain their failures
//!
//! Every helper compares with `expected` as the left operand and, on
//! mismatch, embeds the diff report after a `Details:` line. The `check_*`
//! functions return the failure; the `assert_*` functions panic with it.

use deepassert_core::{Mapping, Node};
use deepassert_diff::{DiffOptions, generate_diff_report};
use thiserror::Error;

/// Why an assertion failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssertionFailure {
    /// The values differ
    #[error("Details:\n{report}")]
    Mismatch {
        /// Diff report, or the "unavailable" text if it could not be produced
        report: String,
    },

    /// A mapping helper was given something other than a mapping
    #[error("{argument} is not a mapping (found {found})")]
    NotAMapping {
        /// Which argument
        argument: &'static str,
        /// Type name of what was passed
        found: &'static str,
    },
}

/// Compare `expected` with `actual`, letting markers in either decide.
///
/// # Errors
///
/// Returns [`AssertionFailure::Mismatch`] with the diff report when they differ.
pub fn check_equal(
    expected: impl Into<Node>,
    actual: impl Into<Node>,
) -> Result<(), AssertionFailure> {
    compare(&expected.into(), &actual.into())
}

/// Panic unless `expected` equals `actual`.
///
/// # Panics
///
/// With `Details:\n{report}` when they differ.
#[track_caller]
pub fn assert_equal(expected: impl Into<Node>, actual: impl Into<Node>) {
    if let Err(failure) = check_equal(expected, actual) {
        panic!("{failure}");
    }
}

/// Compare two mappings after dropping `ignore_keys` from both.
///
/// Only top-level keys are removed; keys missing from either side are fine.
///
/// # Errors
///
/// Returns [`AssertionFailure::NotAMapping`] if either argument is not a
/// dict, and [`AssertionFailure::Mismatch`] when the filtered mappings differ.
pub fn check_mappings_equal(
    mapping1: impl Into<Node>,
    mapping2: impl Into<Node>,
    ignore_keys: &[&str],
) -> Result<(), AssertionFailure> {
    let mut first = into_mapping(mapping1.into(), "mapping1")?;
    let mut second = into_mapping(mapping2.into(), "mapping2")?;
    for key in ignore_keys {
        first.shift_remove(*key);
        second.shift_remove(*key);
    }
    compare(&Node::Dict(first), &Node::Dict(second))
}

/// Panic unless the mappings are equal after dropping `ignore_keys`.
///
/// # Panics
///
/// When [`check_mappings_equal`] fails, with its message.
#[track_caller]
pub fn assert_mappings_equal(
    mapping1: impl Into<Node>,
    mapping2: impl Into<Node>,
    ignore_keys: &[&str],
) {
    if let Err(failure) = check_mappings_equal(mapping1, mapping2, ignore_keys) {
        panic!("{failure}");
    }
}

fn into_mapping(node: Node, argument: &'static str) -> Result<Mapping, AssertionFailure> {
    match node {
        Node::Dict(map) => Ok(map),
        other => Err(AssertionFailure::NotAMapping {
            argument,
            found: other.type_name(),
        }),
    }
}

fn compare(expected: &Node, actual: &Node) -> Result<(), AssertionFailure> {
    // expected on the left: its markers decide
    if expected == actual {
        return Ok(());
    }
    Err(AssertionFailure::Mismatch {
        report: generate_diff_report(expected, actual, &DiffOptions::default()),
    })
}
