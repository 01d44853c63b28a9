// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt;

use deepassert_core::{Node, Path};

/// What differs at a path
///
/// "Added" means present only in the actual tree, "removed" present only in
/// the expected tree.
#[derive(Debug, Clone, PartialEq)]
pub enum DiffKind {
    /// Same type, different value
    ValueChanged {
        /// Expected value
        from: Node,
        /// Actual value
        to: Node,
    },
    /// Different types
    TypeChanged {
        /// Expected value
        from: Node,
        /// Actual value
        to: Node,
    },
    /// Key present only in the actual mapping
    DictItemAdded {
        /// Actual value under the key
        value: Node,
    },
    /// Key present only in the expected mapping
    DictItemRemoved {
        /// Expected value under the key
        value: Node,
    },
    /// Element present only in the actual list
    ListItemAdded {
        /// Actual element
        value: Node,
    },
    /// Element present only in the expected list
    ListItemRemoved {
        /// Expected element
        value: Node,
    },
    /// An override rejected the pair, e.g. a marker whose predicate failed
    PatternMismatch {
        /// The side that carried the pattern
        pattern: Node,
        /// The other side
        value: Node,
    },
}

/// A single difference
#[derive(Debug, Clone, PartialEq)]
pub struct DiffItem {
    /// Where the difference is
    pub path: Path,
    /// What the difference is
    pub kind: DiffKind,
}

impl fmt::Display for DiffItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = &self.path;
        match &self.kind {
            DiffKind::ValueChanged { from, to } => {
                write!(f, "Value of {path} changed from {from} to {to}.")
            }
            DiffKind::TypeChanged { from, to } => write!(
                f,
                "Type of {path} changed from {} to {} and value changed from {from} to {to}.",
                from.type_name(),
                to.type_name()
            ),
            DiffKind::DictItemAdded { .. } => write!(f, "Item {path} added to dictionary."),
            DiffKind::DictItemRemoved { .. } => write!(f, "Item {path} removed from dictionary."),
            DiffKind::ListItemAdded { .. } => write!(f, "Item {path} added to iterable."),
            DiffKind::ListItemRemoved { .. } => write!(f, "Item {path} removed from iterable."),
            DiffKind::PatternMismatch { pattern, value } => {
                write!(f, "Value of {path} does not match {pattern} (got {value}).")
            }
        }
    }
}

/// Result of comparing two trees, in traversal order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diff {
    items: Vec<DiffItem>,
}

impl Diff {
    pub(crate) const fn new(items: Vec<DiffItem>) -> Self {
        Self { items }
    }

    /// Whether the trees are equal
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of differences
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The differences
    #[must_use]
    pub fn items(&self) -> &[DiffItem] {
        &self.items
    }

    /// Consume into the differences
    #[must_use]
    pub fn into_items(self) -> Vec<DiffItem> {
        self.items
    }

    /// One rendered line per difference
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.items.iter().map(ToString::to_string).collect()
    }

    /// All differences, one per line; empty when the trees are equal
    #[must_use]
    pub fn pretty(&self) -> String {
        self.lines().join("\n")
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}
