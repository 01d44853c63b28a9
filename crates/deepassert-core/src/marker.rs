// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt;

#[cfg(feature = "approx")]
use crate::approx::Approx;
use crate::node::Node;

/// Matches any value, including `null`.
pub const ANY: Node = Node::Marker(Marker::Wildcard(Wildcard::Any));
/// Matches any value except `null`.
pub const ANY_BUT_NONE: Node = Node::Marker(Marker::Wildcard(Wildcard::AnyButNone));
/// Matches any mapping, including an empty one.
pub const ANY_DICT: Node = Node::Marker(Marker::Wildcard(Wildcard::AnyDict));
/// Matches any list, including an empty one. Never matches a string.
pub const ANY_LIST: Node = Node::Marker(Marker::Wildcard(Wildcard::AnyList));
/// Matches any string, including the empty string.
pub const ANY_STRING: Node = Node::Marker(Marker::Wildcard(Wildcard::AnyString));

/// Wildcard predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wildcard {
    /// Any value
    Any,
    /// Any non-null value
    AnyButNone,
    /// Any mapping
    AnyDict,
    /// Any list
    AnyList,
    /// Any string
    AnyString,
}

impl Wildcard {
    /// Every wildcard, in declaration order
    pub const ALL: [Self; 5] = [
        Self::Any,
        Self::AnyButNone,
        Self::AnyDict,
        Self::AnyList,
        Self::AnyString,
    ];

    /// Name used when rendering the wildcard in reports
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::AnyButNone => "ANY_BUT_NONE",
            Self::AnyDict => "ANY_DICT",
            Self::AnyList => "ANY_LIST",
            Self::AnyString => "ANY_STRING",
        }
    }

    /// Whether `actual` belongs to the class of values this wildcard stands for
    #[must_use]
    pub const fn matches(self, actual: &Node) -> bool {
        match self {
            Self::Any => true,
            Self::AnyButNone => !matches!(actual, Node::Null),
            Self::AnyDict => matches!(actual, Node::Dict(_)),
            // strings are not lists even though they are sequences of chars
            Self::AnyList => matches!(actual, Node::List(_)),
            Self::AnyString => matches!(actual, Node::String(_)),
        }
    }
}

impl fmt::Display for Wildcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A leaf of an expected structure that matches a class of values
///
/// Equality against a marker is always decided by [`Marker::matches`],
/// never by comparing structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker {
    /// One of the fixed wildcards
    Wildcard(Wildcard),
    /// Approximate numeric value
    #[cfg(feature = "approx")]
    Approx(Approx),
}

impl Marker {
    /// Evaluate the marker's predicate against `actual`.
    ///
    /// A marker always matches an identical marker.
    #[must_use]
    pub fn matches(&self, actual: &Node) -> bool {
        if let Node::Marker(other) = actual
            && other == self
        {
            return true;
        }
        match self {
            Self::Wildcard(wildcard) => wildcard.matches(actual),
            #[cfg(feature = "approx")]
            Self::Approx(approx) => approx.matches(actual),
        }
    }

    /// The kind of this marker, ignoring any parameters
    #[must_use]
    pub const fn kind(&self) -> MarkerKind {
        match self {
            Self::Wildcard(wildcard) => MarkerKind::Wildcard(*wildcard),
            #[cfg(feature = "approx")]
            Self::Approx(_) => MarkerKind::Approx,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard(wildcard) => wildcard.fmt(f),
            #[cfg(feature = "approx")]
            Self::Approx(approx) => approx.fmt(f),
        }
    }
}

impl From<Wildcard> for Marker {
    fn from(wildcard: Wildcard) -> Self {
        Self::Wildcard(wildcard)
    }
}

/// Parameterless marker kind, used to configure which markers a comparison recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// A wildcard
    Wildcard(Wildcard),
    /// The approximate numeric marker
    #[cfg(feature = "approx")]
    Approx,
}

impl MarkerKind {
    /// Type name reported for markers of this kind
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Wildcard(wildcard) => wildcard.name(),
            #[cfg(feature = "approx")]
            Self::Approx => "approx",
        }
    }
}
