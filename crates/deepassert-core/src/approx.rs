// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt;

use crate::error::{CoreError, Result};
use crate::marker::Marker;
use crate::node::Node;

/// Relative tolerance used by [`approx`]
pub const DEFAULT_REL_TOLERANCE: f64 = 1e-6;
/// Absolute tolerance used by [`approx`]
pub const DEFAULT_ABS_TOLERANCE: f64 = 1e-12;

/// Expected number with a tolerance
///
/// Matches any numeric node within `max(rel * |expected|, abs)` of `expected`.
/// Infinities only match the same infinity and NaN matches nothing.
///
/// Two `Approx` values are equal when their fields are bit-identical, so a
/// marker built from NaN still equals itself.
#[derive(Debug, Clone, Copy)]
pub struct Approx {
    expected: f64,
    rel: f64,
    abs: f64,
}

/// Build an [`Approx`] marker with the default tolerances.
///
/// ```
/// use deepassert_core::{approx, pattern};
///
/// assert!(pattern!({"ratio": approx(0.3)}) == pattern!({"ratio": 0.1 + 0.2}));
/// ```
#[must_use]
pub const fn approx(expected: f64) -> Approx {
    Approx {
        expected,
        rel: DEFAULT_REL_TOLERANCE,
        abs: DEFAULT_ABS_TOLERANCE,
    }
}

impl Approx {
    /// Replace the relative tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTolerance`] if `rel` is negative or NaN.
    pub fn with_rel(self, rel: f64) -> Result<Self> {
        check_tolerance("rel", rel)?;
        Ok(Self { rel, ..self })
    }

    /// Replace the absolute tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTolerance`] if `abs` is negative or NaN.
    pub fn with_abs(self, abs: f64) -> Result<Self> {
        check_tolerance("abs", abs)?;
        Ok(Self { abs, ..self })
    }

    /// The expected value
    #[must_use]
    pub const fn expected(&self) -> f64 {
        self.expected
    }

    /// Effective tolerance around the expected value
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        (self.rel * self.expected.abs()).max(self.abs)
    }

    /// Whether `value` lies within tolerance of the expected value
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn accepts(&self, value: f64) -> bool {
        if self.expected.is_nan() || value.is_nan() {
            return false;
        }
        if self.expected == value {
            return true;
        }
        if self.expected.is_infinite() || value.is_infinite() {
            return false;
        }
        (value - self.expected).abs() <= self.tolerance()
    }

    /// Whether `actual` is a number within tolerance
    #[must_use]
    pub fn matches(&self, actual: &Node) -> bool {
        match actual {
            Node::Number(number) => number.as_f64().is_some_and(|value| self.accepts(value)),
            _ => false,
        }
    }
}

fn check_tolerance(name: &'static str, value: f64) -> Result<()> {
    if value.is_nan() || value < 0.0 {
        return Err(CoreError::InvalidTolerance { name, value });
    }
    Ok(())
}

impl PartialEq for Approx {
    fn eq(&self, other: &Self) -> bool {
        self.expected.to_bits() == other.expected.to_bits()
            && self.rel.to_bits() == other.rel.to_bits()
            && self.abs.to_bits() == other.abs.to_bits()
    }
}

impl fmt::Display for Approx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ± {:e}", self.expected, self.tolerance())
    }
}

impl From<Approx> for Marker {
    fn from(approx: Approx) -> Self {
        Self::Approx(approx)
    }
}

impl From<Approx> for Node {
    fn from(approx: Approx) -> Self {
        Self::Marker(Marker::Approx(approx))
    }
}
