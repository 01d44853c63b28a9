// SPDX-License-Identifier: MIT OR Apache-2.0
//! Comparison override hook
//!
//! The engine asks each installed [`ComparisonOverride`] whether it wants to
//! decide a node pair before falling back to structural comparison.

use deepassert_core::{MarkerKind, Node, Wildcard};
use smallvec::SmallVec;

/// Pluggable rule that replaces the engine's default comparison for some node pairs
pub trait ComparisonOverride {
    /// Whether this rule decides equality of `left` and `right`
    fn applies(&self, left: &Node, right: &Node) -> bool;

    /// Decide equality. Only called when [`applies`](Self::applies) returned true.
    fn resolve(&self, left: &Node, right: &Node) -> bool;

    /// Value used in place of `value` when the engine fingerprints list elements.
    fn normalize_for_hashing<'n>(&self, value: &'n Node) -> &'n Node {
        value
    }
}

/// Set of marker kinds an operator recognizes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerKinds {
    kinds: SmallVec<[MarkerKind; 6]>,
}

impl MarkerKinds {
    /// No kinds at all; markers are compared structurally
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every wildcard kind
    #[must_use]
    pub fn wildcards() -> Self {
        Wildcard::ALL.into_iter().map(MarkerKind::Wildcard).collect()
    }

    /// Every kind available in this build: all wildcards, plus the
    /// approximate marker when the `approx` feature is compiled in.
    #[must_use]
    pub fn detect() -> Self {
        #[allow(unused_mut)]
        let mut kinds = Self::wildcards();
        #[cfg(feature = "approx")]
        kinds.insert(MarkerKind::Approx);
        kinds
    }

    /// Add a kind; duplicates are ignored
    pub fn insert(&mut self, kind: MarkerKind) {
        if !self.contains(kind) {
            self.kinds.push(kind);
        }
    }

    /// Whether `kind` is in the set
    #[must_use]
    pub fn contains(&self, kind: MarkerKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Whether `node` is a marker of a kind in the set
    #[must_use]
    pub fn recognizes(&self, node: &Node) -> bool {
        node.as_marker()
            .is_some_and(|marker| self.contains(marker.kind()))
    }

    /// Number of kinds
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl FromIterator<MarkerKind> for MarkerKinds {
    fn from_iter<I: IntoIterator<Item = MarkerKind>>(iter: I) -> Self {
        let mut kinds = Self::empty();
        for kind in iter {
            kinds.insert(kind);
        }
        kinds
    }
}

/// Override that lets markers decide equality instead of structure
#[derive(Debug, Clone)]
pub struct MarkerOperator {
    kinds: MarkerKinds,
}

impl MarkerOperator {
    /// Operator recognizing exactly `kinds`
    #[must_use]
    pub const fn new(kinds: MarkerKinds) -> Self {
        Self { kinds }
    }

    /// Operator recognizing every marker kind in this build
    #[must_use]
    pub fn detect() -> Self {
        Self::new(MarkerKinds::detect())
    }

    /// Recognized kinds
    #[must_use]
    pub const fn kinds(&self) -> &MarkerKinds {
        &self.kinds
    }
}

impl Default for MarkerOperator {
    fn default() -> Self {
        Self::detect()
    }
}

impl ComparisonOverride for MarkerOperator {
    fn applies(&self, left: &Node, right: &Node) -> bool {
        self.kinds.recognizes(left) || self.kinds.recognizes(right)
    }

    fn resolve(&self, left: &Node, right: &Node) -> bool {
        match (left, right) {
            (Node::Marker(marker), actual) if self.kinds.contains(marker.kind()) => {
                marker.matches(actual)
            }
            (actual, Node::Marker(marker)) if self.kinds.contains(marker.kind()) => {
                marker.matches(actual)
            }
            // not reachable through the engine, which checks `applies` first
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deepassert_core::{ANY, ANY_BUT_NONE, ANY_DICT, ANY_LIST, ANY_STRING, pattern};

    #[test]
    fn test_applies_on_either_side() {
        let op = MarkerOperator::detect();
        assert!(op.applies(&ANY, &Node::from(1)));
        assert!(op.applies(&Node::from(1), &ANY_DICT));
        assert!(!op.applies(&Node::from(1), &Node::from(1)));
        assert!(!op.applies(&pattern!({"a": ANY}), &pattern!({"a": 1})));
    }

    #[test]
    fn test_resolve_consults_the_marker() {
        let op = MarkerOperator::detect();
        assert!(op.resolve(&ANY_BUT_NONE, &Node::from(0)));
        assert!(op.resolve(&Node::from(0), &ANY_BUT_NONE));
        assert!(!op.resolve(&ANY_BUT_NONE, &Node::Null));
        assert!(!op.resolve(&Node::Null, &ANY_BUT_NONE));
        assert!(op.resolve(&ANY_LIST, &pattern!([])));
        assert!(!op.resolve(&pattern!("abc"), &ANY_LIST));
        assert!(op.resolve(&ANY_STRING, &pattern!("")));
    }

    #[test]
    fn test_left_marker_takes_precedence() {
        let op = MarkerOperator::detect();
        assert!(op.resolve(&ANY, &ANY_DICT));
        assert!(!op.resolve(&ANY_DICT, &ANY));
        assert!(op.resolve(&ANY_DICT, &ANY_DICT));
    }

    #[test]
    fn test_unrecognized_kinds_do_not_apply() {
        let op = MarkerOperator::new(
            [MarkerKind::Wildcard(Wildcard::Any)].into_iter().collect(),
        );
        assert!(op.applies(&ANY, &Node::Null));
        assert!(!op.applies(&ANY_DICT, &pattern!({})));
        assert!(!MarkerOperator::new(MarkerKinds::empty()).applies(&ANY, &Node::Null));
    }

    #[test]
    fn test_normalize_for_hashing_is_identity() {
        let op = MarkerOperator::detect();
        let node = pattern!([ANY, 1]);
        assert!(std::ptr::eq(op.normalize_for_hashing(&node), &node));
    }

    #[test]
    fn test_detect_covers_all_wildcards() {
        let kinds = MarkerKinds::detect();
        for wildcard in Wildcard::ALL {
            assert!(kinds.contains(MarkerKind::Wildcard(wildcard)));
        }
        #[cfg(feature = "approx")]
        assert!(kinds.contains(MarkerKind::Approx));
        #[cfg(not(feature = "approx"))]
        assert_eq!(kinds.len(), Wildcard::ALL.len());
    }

    #[test]
    fn test_insert_ignores_duplicates() {
        let mut kinds = MarkerKinds::wildcards();
        kinds.insert(MarkerKind::Wildcard(Wildcard::Any));
        assert_eq!(kinds.len(), 5);
    }
}
